use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if e.code == ApiError::VALIDATION {
                        if let Some(errors) = e
                            .details
                            .as_ref()
                            .and_then(|d| d.get("errors"))
                            .and_then(|v| v.as_array())
                        {
                            return view! {
                                <ul class="list-disc list-inside text-sm">
                                    {errors.iter().map(|err| {
                                        view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                    }).collect_view()}
                                </ul>
                            }.into_view();
                        }
                    }
                    match (e.code.as_str(), e.status()) {
                        (_, Some(status)) => view! {
                            <div class="text-xs opacity-75">{format!("Code: {} (HTTP {})", e.code, status)}</div>
                        }.into_view(),
                        (ApiError::UNKNOWN, None) | ("", None) => ().into_view(),
                        (code, None) => view! {
                            <div class="text-xs opacity-75">{format!("Code: {}", code)}</div>
                        }.into_view(),
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Please fix the form".into(),
                code: ApiError::VALIDATION.into(),
                details: Some(json!({
                    "errors": ["Industry is required", "Limit must be between 1 and 100"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Please fix the form"));
        assert!(html.contains("Industry is required"));
        assert!(html.contains("Limit must be between 1 and 100"));
    }

    #[test]
    fn inline_error_renders_code_and_status() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::http_status(502, "Bad Gateway")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Bad Gateway"));
        assert!(html.contains("Code: HTTP_STATUS (HTTP 502)"));
    }

    #[test]
    fn inline_error_renders_code_without_status() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::timeout("Request timed out")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Code: TIMEOUT"));
    }
}
