use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Runtime for view-model tests; resources are created but never start fetching.
pub fn with_idle_resources<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

/// Undoes the entity escaping SSR applies to `/` and `'` in text nodes.
pub fn unescape(html: &str) -> String {
    html.replace("&#x2F;", "/").replace("&#x27;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_slashes_are_escaped_and_unescape_restores_them() {
        let html = render_to_string(|| view! { <p>{"N/A"}</p> });
        assert!(!html.contains("N/A"));
        assert!(unescape(&html).contains("N/A"));
    }
}
