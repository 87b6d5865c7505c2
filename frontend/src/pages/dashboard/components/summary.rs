use crate::{
    components::cards::StatCard,
    pages::dashboard::{
        aggregator::{DashboardSnapshot, StatField},
        utils::stat_value,
    },
};
use leptos::*;

#[component]
pub fn SummarySection(snapshot: RwSignal<DashboardSnapshot>) -> impl IntoView {
    let field = move |pick: fn(&DashboardSnapshot) -> StatField| {
        let value = Signal::derive(move || stat_value(snapshot.with(pick)));
        let loading = Signal::derive(move || snapshot.with(pick).loading);
        (value, loading)
    };
    let (companies, companies_loading) = field(|s| s.stats.companies.total);
    let (contacts, contacts_loading) = field(|s| s.stats.contacts.total);
    let (with_email, with_email_loading) = field(|s| s.stats.contacts.with_email);
    let (lists, lists_loading) = field(|s| s.stats.lists.total);

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard
                title="Total Companies"
                description="Companies in database"
                value=companies
                loading=companies_loading
                accent="bg-blue-100 text-blue-600"
            />
            <StatCard
                title="Total Contacts"
                description="Contacts in database"
                value=contacts
                loading=contacts_loading
                accent="bg-green-100 text-green-600"
            />
            <StatCard
                title="Contacts with Email"
                description="Ready for email campaigns"
                value=with_email
                loading=with_email_loading
                accent="bg-purple-100 text-purple-600"
            />
            <StatCard
                title="Lead Lists"
                description="Organized lead lists"
                value=lists
                loading=lists_loading
                accent="bg-orange-100 text-orange-600"
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::dashboard::aggregator::{Metric, MetricUpdate, MetricValue};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_settled_counts_and_skeletons_for_pending() {
        let html = render_to_string(move || {
            let mut snapshot = DashboardSnapshot::loading();
            snapshot.apply(MetricUpdate {
                metric: Metric::Companies,
                result: Ok(MetricValue::Count(1_234)),
            });
            let snapshot = create_rw_signal(snapshot);
            view! { <SummarySection snapshot=snapshot /> }
        });
        assert!(html.contains("Total Companies"));
        assert!(html.contains("1,234"));
        assert!(html.contains("animate-pulse"));
    }
}
