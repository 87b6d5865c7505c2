use leptos::*;

const CONTROL_CLASS: &str = "w-full rounded-xl border-2 border-form-control-border bg-form-control-bg py-2 px-3 text-sm text-fg shadow-sm focus:border-action-primary-border-hover focus:ring-4 focus:ring-action-primary-focus disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
fn FieldLabel(label: &'static str, #[prop(optional)] required: bool) -> impl IntoView {
    view! {
        <label class="text-sm font-bold text-fg-muted ml-1">
            {label}
            {required.then(|| view! { <span class="text-status-error-text">{" *"}</span> })}
        </label>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <FieldLabel label=label required=required />
            <input
                type=input_type
                class=CONTROL_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <FieldLabel label=label />
            <textarea
                class=CONTROL_CLASS
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Select over `(value, label)` pairs; an empty value acts as the "any" option.
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <FieldLabel label=label required=required />
            <select
                class=CONTROL_CLASS
                disabled=move || disabled.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(opt_value, opt_label)| {
                        let selected_value = opt_value.clone();
                        view! {
                            <option
                                value=opt_value
                                selected=move || value.get() == selected_value
                            >
                                {opt_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn CheckboxField(
    label: &'static str,
    checked: RwSignal<bool>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="flex items-start gap-2 cursor-pointer">
            <input
                type="checkbox"
                class="mt-1 h-4 w-4 rounded border-form-control-border"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="text-sm text-fg">
                {label}
                {hint.map(|h| view! { <span class="block text-xs text-fg-muted">{h}</span> })}
            </span>
        </label>
    }
}

/// Builds select options from static values, using each value as its own label.
pub fn options_from(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::options_from;

    #[test]
    fn options_use_value_as_label() {
        assert_eq!(
            options_from(&["1-10", "500+"]),
            vec![
                ("1-10".to_string(), "1-10".to_string()),
                ("500+".to_string(), "500+".to_string())
            ]
        );
    }
}
