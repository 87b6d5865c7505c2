use crate::{
    components::cards::Card,
    pages::dashboard::{aggregator::DashboardSnapshot, utils::coverage_label},
    utils::format::format_count,
};
use leptos::*;

#[component]
pub fn DataQualityCard(snapshot: RwSignal<DashboardSnapshot>) -> impl IntoView {
    let with_email = move || snapshot.with(|s| format_count(s.stats.contacts.with_email.value));
    let with_phone = move || snapshot.with(|s| format_count(s.stats.contacts.with_phone.value));
    let email_pct = move || snapshot.with(|s| coverage_label(s.email_coverage()));
    let phone_pct = move || snapshot.with(|s| coverage_label(s.phone_coverage()));

    view! {
        <Card title="Data Quality" description="Contact data completeness overview">
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <span class="text-sm">{"Contacts with Email"}</span>
                    <div class="text-right">
                        <span class="font-medium">{with_email}</span>
                        <span class="text-fg-muted text-sm ml-1">{email_pct}</span>
                    </div>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-sm">{"Contacts with Phone"}</span>
                    <div class="text-right">
                        <span class="font-medium">{with_phone}</span>
                        <span class="text-fg-muted text-sm ml-1">{phone_pct}</span>
                    </div>
                </div>
            </div>
        </Card>
    }
}
