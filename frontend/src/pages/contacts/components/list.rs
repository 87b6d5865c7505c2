use crate::{
    api::Contact,
    components::cards::{Badge, BadgeTone},
    utils::format::{format_created_at, format_score},
};
use leptos::*;

/// Score bands used for the badge tone.
pub fn score_tone(score: f64) -> BadgeTone {
    match score.round() as i64 {
        s if s >= 80 => BadgeTone::Success,
        s if s >= 50 => BadgeTone::Info,
        _ => BadgeTone::Outline,
    }
}

#[component]
pub fn ContactList(contacts: Vec<Contact>) -> impl IntoView {
    view! {
        <ul class="divide-y divide-border">
            {contacts
                .into_iter()
                .map(|contact| view! { <ContactRow contact=contact /> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ContactRow(contact: Contact) -> impl IntoView {
    let name = contact.full_name();
    let headline = contact.headline();
    let email = contact.email.clone().filter(|_| contact.has_email());
    let phone = contact.phone.clone().filter(|_| contact.has_phone());
    let linkedin = contact.linkedin_url.clone().filter(|u| !u.trim().is_empty());
    let created = contact.created_at.as_deref().map(format_created_at);
    let score = contact.lead_score;

    view! {
        <li class="py-4 flex items-start justify-between gap-4">
            <div class="space-y-1">
                <p class="font-medium text-fg">{name}</p>
                {headline.map(|h| view! { <p class="text-sm text-fg-muted">{h}</p> })}
                <div class="flex flex-wrap gap-3 text-xs text-fg-muted">
                    {email.map(|e| view! { <a href=format!("mailto:{e}") class="hover:underline">{e}</a> })}
                    {phone.map(|p| view! { <span>{p}</span> })}
                    {linkedin.map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">
                            {"LinkedIn"}
                        </a>
                    })}
                </div>
            </div>
            <div class="text-right space-y-1">
                {score.map(|s| view! { <Badge tone=score_tone(s)>{format!("Score: {}", format_score(s))}</Badge> })}
                {created.map(|c| view! { <p class="text-xs text-fg-muted">{format!("Added {c}")}</p> })}
            </div>
        </li>
    }
}
