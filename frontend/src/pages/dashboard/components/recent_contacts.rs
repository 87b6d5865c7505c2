use crate::{
    api::Contact,
    components::cards::{Badge, BadgeTone, Card},
    pages::dashboard::aggregator::DashboardSnapshot,
    utils::format::format_score,
};
use leptos::*;

#[component]
pub fn RecentContactsSection(snapshot: RwSignal<DashboardSnapshot>) -> impl IntoView {
    let loading = move || snapshot.with(|s| s.recent.loading && s.recent.contacts.is_empty());
    let contacts = move || snapshot.with(|s| s.recent.contacts.clone());

    view! {
        <Card title="Recent Contacts" description="Latest contacts added to your database">
            {move || {
                if loading() {
                    view! { <RecentContactsSkeleton/> }.into_view()
                } else {
                    let list = contacts();
                    if list.is_empty() {
                        view! {
                            <div class="text-center py-8">
                                <p class="text-fg-muted">{"No contacts yet"}</p>
                                <p class="text-sm text-fg-muted">
                                    {"Start by generating leads or adding companies"}
                                </p>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <ul class="space-y-4">
                                {list.into_iter().map(|c| view! { <RecentContactRow contact=c/> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }
            }}
        </Card>
    }
}

#[component]
fn RecentContactsSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-3">
            {(0..3)
                .map(|_| view! {
                    <div class="animate-pulse flex items-center space-x-4">
                        <div class="rounded-full bg-surface-muted h-10 w-10"></div>
                        <div class="flex-1 space-y-2">
                            <div class="h-4 bg-surface-muted rounded w-1/4"></div>
                            <div class="h-3 bg-surface-muted rounded w-1/2"></div>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RecentContactRow(contact: Contact) -> impl IntoView {
    let name = contact.full_name();
    let headline = contact.headline();
    let has_email = contact.has_email();
    let has_phone = contact.has_phone();
    let score = contact.lead_score.map(format_score);

    view! {
        <li class="flex items-center justify-between p-3 border border-border rounded-lg">
            <div>
                <p class="font-medium text-fg">{name}</p>
                {headline.map(|h| view! { <p class="text-sm text-fg-muted">{h}</p> })}
            </div>
            <div class="flex items-center space-x-2">
                <Show when=move || has_email>
                    <Badge>{"Email"}</Badge>
                </Show>
                <Show when=move || has_phone>
                    <Badge>{"Phone"}</Badge>
                </Show>
                {score.map(|s| view! { <Badge tone=BadgeTone::Info>{s}</Badge> })}
            </div>
        </li>
    }
}
