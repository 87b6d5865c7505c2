use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Outline => "border border-border bg-surface-elevated text-fg hover:bg-action-ghost-bg-hover",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    /// `"submit"` inside forms; plain buttons never submit by accident.
    #[prop(default = "button")] button_type: &'static str,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_use_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Outline.classes().contains("border-border"));
        assert!(!ButtonVariant::Ghost.classes().contains("border"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_button_is_disabled_with_spinner() {
        let html = render_to_string(|| {
            view! { <Button variant=ButtonVariant::Outline loading=true>"Export Contacts"</Button> }
        });
        assert!(html.contains("Export Contacts"));
        assert!(html.contains("animate-spin"));
        assert!(html.contains("disabled"));
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn submit_buttons_carry_submit_type() {
        let html = render_to_string(|| {
            view! { <Button button_type="submit">"Apply"</Button> }
        });
        assert!(html.contains(r#"type="submit""#));
    }
}
