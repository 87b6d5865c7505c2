use crate::{
    api::{Company, Contact},
    components::cards::{Badge, BadgeTone, Card},
    pages::lead_generation::utils::{more_label, PREVIEW_COMPANIES, PREVIEW_CONTACTS},
    utils::format::format_score,
};
use leptos::*;

#[component]
pub fn CompaniesPreview(companies: Vec<Company>) -> impl IntoView {
    let more = more_label(companies.len(), PREVIEW_COMPANIES, "companies");

    view! {
        <Card title="Companies Found">
            <div class="space-y-4">
                {companies
                    .into_iter()
                    .take(PREVIEW_COMPANIES)
                    .map(|company| view! { <CompanyPreviewRow company=company /> })
                    .collect_view()}
                {more.map(|text| view! { <p class="text-sm text-fg-muted text-center">{text}</p> })}
            </div>
        </Card>
    }
}

#[component]
fn CompanyPreviewRow(company: Company) -> impl IntoView {
    let location = company.display_location();
    let size = company.size.clone().map(|s| format!("{s} employees"));
    let contacts = format!("{} contacts", company.contact_count.unwrap_or(0));
    let website = company.website.clone().filter(|w| !w.trim().is_empty());

    view! {
        <div class="border border-border rounded-lg p-4">
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-semibold text-fg">{company.name}</h3>
                    {company.industry.map(|i| view! { <p class="text-sm text-fg-muted">{i}</p> })}
                    {location.map(|l| view! { <p class="text-sm text-fg-muted">{l}</p> })}
                </div>
                <div class="text-right">
                    {size.map(|s| view! { <Badge>{s}</Badge> })}
                    <p class="text-sm text-fg-muted mt-1">{contacts}</p>
                </div>
            </div>
            {website.map(|url| view! {
                <a
                    href=url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block mt-2 text-sm text-blue-600 hover:underline"
                >
                    {url}
                </a>
            })}
        </div>
    }
}

#[component]
pub fn ContactsPreview(contacts: Vec<Contact>) -> impl IntoView {
    let more = more_label(contacts.len(), PREVIEW_CONTACTS, "contacts");

    view! {
        <Card title="Contacts Found">
            <div class="space-y-4">
                {contacts
                    .into_iter()
                    .take(PREVIEW_CONTACTS)
                    .map(|contact| view! { <ContactPreviewRow contact=contact /> })
                    .collect_view()}
                {more.map(|text| view! { <p class="text-sm text-fg-muted text-center">{text}</p> })}
            </div>
        </Card>
    }
}

#[component]
fn ContactPreviewRow(contact: Contact) -> impl IntoView {
    let name = contact.full_name();
    let score = contact
        .lead_score
        .map(|s| format!("Score: {}/100", format_score(s)));
    let confidence = contact
        .email_confidence
        .map(|c| format!("Email: {}% confidence", format_score(c)));
    let email = contact.email.clone().filter(|_| contact.has_email());
    let phone = contact.phone.clone().filter(|_| contact.has_phone());
    let linkedin = contact.linkedin_url.clone().filter(|u| !u.trim().is_empty());

    view! {
        <div class="border border-border rounded-lg p-4">
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-semibold text-fg">{name}</h3>
                    {contact.job_title.map(|t| view! { <p class="text-sm text-fg-muted">{t}</p> })}
                    {contact.company_name.map(|c| view! { <p class="text-sm text-fg-muted">{c}</p> })}
                </div>
                <div class="text-right">
                    {score.map(|s| view! { <Badge tone=BadgeTone::Info>{s}</Badge> })}
                    {confidence.map(|c| view! { <p class="text-xs text-fg-muted mt-1">{c}</p> })}
                </div>
            </div>
            <div class="flex flex-wrap gap-2 mt-2 text-xs text-fg-muted">
                {email.map(|e| view! { <span>{e}</span> })}
                {phone.map(|p| view! { <span>{p}</span> })}
                {linkedin.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">
                        {"LinkedIn"}
                    </a>
                })}
            </div>
        </div>
    }
}
