use crate::pages::dashboard::{
    components::{
        DataQualityCard, GettingStartedCard, QuickActions, RecentContactsSection, SummarySection,
    },
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <DashboardFrame>
            <SummarySection snapshot=vm.snapshot />
            <Show when=move || !vm.violations.get().is_empty()>
                <div class="bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-3 rounded text-sm">
                    <p class="font-semibold">{"Backend counts look inconsistent"}</p>
                    <ul class="list-disc list-inside">
                        {move || vm.violations.get().into_iter().map(|v| view! { <li>{v.to_string()}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>
            <QuickActions />
            <RecentContactsSection snapshot=vm.snapshot />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <DataQualityCard snapshot=vm.snapshot />
                <GettingStartedCard />
            </div>
        </DashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::config::provide_config;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_page_renders_sections_in_loading_state() {
        let html = render_to_string(move || {
            provide_config("http://localhost:5000");
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Total Companies"));
        assert!(html.contains("Quick Actions"));
        assert!(html.contains("Recent Contacts"));
        assert!(html.contains("Data Quality"));
        assert!(html.contains("animate-pulse"));
        assert!(!html.contains("Backend counts look inconsistent"));
    }
}
