use crate::state::toast::{use_toast, Toast, ToastVariant};
use leptos::*;

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_toast();
    let items = toasts.toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80" role="status" aria-live="polite">
            <For
                each=move || items.get()
                key=|t: &Toast| t.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let tone = match toast.variant {
                        ToastVariant::Default => "bg-surface-elevated border-border text-fg",
                        ToastVariant::Destructive => "bg-status-error-bg border-status-error-border text-status-error-text",
                    };
                    view! {
                        <div class=format!("border rounded-lg shadow-lg px-4 py-3 flex items-start justify-between gap-3 {tone}")>
                            <div>
                                <p class="text-sm font-semibold">{toast.title}</p>
                                {toast.description.map(|d| view! { <p class="text-sm opacity-90">{d}</p> })}
                            </div>
                            <button
                                class="text-xs opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "x"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn viewport_renders_pushed_toasts() {
        let html = render_to_string(|| {
            let toasts = use_toast();
            toasts.success("Exported 12 records", "contacts.csv");
            toasts.error("Export failed", "Server error");
            view! { <ToastViewport/> }
        });
        assert!(html.contains("Exported 12 records"));
        assert!(html.contains("Export failed"));
        assert!(html.contains("bg-status-error-bg"));
    }
}
