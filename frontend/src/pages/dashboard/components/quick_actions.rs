use crate::components::cards::Card;
use leptos::*;

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <Card title="Quick Actions" description="Common tasks to get started with your lead database">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <QuickAction href="/lead-generation" label="Generate Leads" hint="Find new prospects" primary=true/>
                <QuickAction href="/companies" label="Add Company" hint="Manual entry"/>
                <QuickAction href="/export" label="Export Data" hint="For CRM import"/>
            </div>
        </Card>
    }
}

#[component]
fn QuickAction(
    href: &'static str,
    label: &'static str,
    hint: &'static str,
    #[prop(optional)] primary: bool,
) -> impl IntoView {
    let class = if primary {
        "bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
    } else {
        "border border-border text-fg hover:bg-action-ghost-bg-hover"
    };
    view! {
        <a
            href=href
            class=format!("w-full rounded-md p-4 flex flex-col items-center space-y-2 text-sm font-semibold {class}")
        >
            <span>{label}</span>
            <span class="text-xs opacity-75">{hint}</span>
        </a>
    }
}

const TIPS: [(&str, &str); 3] = [
    (
        "Generate Industry Leads",
        "Use the Lead Generation tool to find prospects by industry",
    ),
    (
        "Organize into Lists",
        "Create targeted lists for specific campaigns",
    ),
    ("Export to CRM", "Export data in Zoho CRM or HubSpot format"),
];

#[component]
pub fn GettingStartedCard() -> impl IntoView {
    view! {
        <Card title="Getting Started" description="Tips to maximize your lead database">
            <ol class="space-y-3">
                {TIPS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, body))| view! {
                        <li class="flex items-start space-x-3">
                            <span class="flex items-center justify-center w-6 h-6 bg-blue-100 rounded-full text-xs font-medium text-blue-600">
                                {i + 1}
                            </span>
                            <div>
                                <p class="text-sm font-medium">{*title}</p>
                                <p class="text-xs text-fg-muted">{*body}</p>
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </Card>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn quick_actions_link_to_pages() {
        let html = render_to_string(|| view! { <QuickActions/> });
        assert!(html.contains("/lead-generation"));
        assert!(html.contains("/companies"));
        assert!(html.contains("/export"));
    }

    #[test]
    fn getting_started_lists_three_steps() {
        let html = render_to_string(|| view! { <GettingStartedCard/> });
        assert!(html.contains("Organize into Lists"));
        assert!(html.contains("HubSpot"));
    }
}
