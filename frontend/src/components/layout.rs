use crate::{
    components::{
        cards::{Badge, BadgeTone},
        common::{Button, ButtonVariant},
        toast::ToastViewport,
    },
    state::config::{use_config, ApiStatus},
};
use leptos::*;

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Companies", "/companies"),
    ("Contacts", "/contacts"),
    ("Lead Lists", "/lead-lists"),
    ("Lead Generation", "/lead-generation"),
    ("Export", "/export"),
    ("Settings", "/settings"),
];

fn is_active(current: &str, href: &str) -> bool {
    current == href || (href == "/dashboard" && current == "/")
}

fn current_path() -> Signal<String> {
    match use_context::<leptos_router::RouterContext>() {
        Some(_) => {
            let location = leptos_router::use_location();
            location.pathname.into()
        }
        None => Signal::derive(String::new),
    }
}

#[component]
pub fn ApiStatusBadge() -> impl IntoView {
    let (config, _) = use_config();
    let status = move || config.with(|c| c.api_status);
    view! {
        {move || {
            let status = status();
            let tone = match status {
                ApiStatus::Checking => BadgeTone::Warning,
                ApiStatus::Connected => BadgeTone::Success,
                ApiStatus::Disconnected => BadgeTone::Danger,
            };
            view! { <Badge tone=tone>{status.label()}</Badge> }
        }}
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (open, set_open) = create_signal(true);
    let path = current_path();
    let toggle = move |_: ev::MouseEvent| set_open.update(|o| *o = !*o);

    view! {
        <aside class=move || {
            format!(
                "fixed inset-y-0 left-0 z-40 flex flex-col bg-surface-elevated shadow-lg transition-all duration-300 {}",
                if open.get() { "w-64" } else { "w-16" }
            )
        }>
            <div class="flex items-center justify-between p-4 border-b border-border">
                <Show when=move || open.get()>
                    <div>
                        <h1 class="text-lg font-semibold text-fg">{"LeadDB"}</h1>
                        <p class="text-xs text-fg-muted">{"Lead Database System"}</p>
                    </div>
                </Show>
                <Button variant=ButtonVariant::Ghost class="!p-1" on:click=toggle>
                    <span class="sr-only">{"Toggle navigation"}</span>
                    <svg class="h-4 w-4" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                    </svg>
                </Button>
            </div>
            <Show when=move || open.get()>
                <div class="px-4 py-2 border-b border-border flex items-center justify-between">
                    <span class="text-xs text-fg-muted">{"API Status"}</span>
                    <ApiStatusBadge/>
                </div>
            </Show>
            <nav class="flex-1 px-2 py-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|&(name, href)| {
                        let class = move || {
                            let base = "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors";
                            if is_active(&path.get(), href) {
                                format!("{base} bg-blue-100 text-blue-900")
                            } else {
                                format!("{base} text-fg-muted hover:bg-action-ghost-bg-hover hover:text-fg")
                            }
                        };
                        view! {
                            <a href=href class=class title=name>
                                <Show when=move || open.get() fallback=move || name.chars().next().unwrap_or(' ').to_string()>
                                    {name}
                                </Show>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <Show when=move || open.get()>
                <div class="p-4 border-t border-border text-xs text-fg-muted">
                    <p>{concat!("LeadDB v", env!("CARGO_PKG_VERSION"))}</p>
                </div>
            </Show>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Sidebar/>
            <main class="pl-16 lg:pl-64">
                <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </div>
            </main>
            <ToastViewport/>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-3xl font-bold text-fg">{title}</h1>
            {description.map(|d| view! { <p class="text-fg-muted">{d}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_counts_as_dashboard() {
        assert!(is_active("/", "/dashboard"));
        assert!(is_active("/export", "/export"));
        assert!(!is_active("/export", "/contacts"));
    }
}
