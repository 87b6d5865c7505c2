use leptos::*;

#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bg-surface-elevated overflow-hidden shadow rounded-lg {class}")>
            <div class="px-4 py-5 sm:p-6 space-y-4">
                <div>
                    <h3 class="text-lg leading-6 font-medium text-fg">{title}</h3>
                    {description.map(|d| view! { <p class="mt-1 text-sm text-fg-muted">{d}</p> })}
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Count tile; shows a pulsing placeholder while its source is loading.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] accent: String,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg p-6">
            <div class="flex items-center justify-between pb-2">
                <p class="text-sm font-medium text-fg-muted">{title}</p>
                <span class=format!("p-2 rounded-lg {accent}")></span>
            </div>
            <div class="text-2xl font-bold text-fg">
                <Show
                    when=move || loading.get()
                    fallback=move || view! { <span>{move || value.get()}</span> }
                >
                    <div class="animate-pulse bg-surface-muted h-8 w-16 rounded"></div>
                </Show>
            </div>
            <p class="text-xs text-fg-muted mt-1">{description}</p>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Outline,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeTone::Outline => "border border-border text-fg",
            BadgeTone::Info => "border border-blue-600 text-blue-600",
            BadgeTone::Success => "border border-green-600 text-green-600",
            BadgeTone::Warning => "border border-yellow-600 text-yellow-600",
            BadgeTone::Danger => "border border-red-600 text-red-600",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] tone: BadgeTone, children: Children) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-md px-2 py-0.5 text-xs font-medium {}",
            tone.classes()
        )>{children()}</span>
    }
}
