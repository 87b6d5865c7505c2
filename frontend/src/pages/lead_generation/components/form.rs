use crate::{
    components::{
        cards::Card,
        common::Button,
        error::InlineErrorMessage,
        forms::{options_from, CheckboxField, SelectField, TextField},
    },
    pages::lead_generation::{
        utils::{data_source_hint, COMPANY_SIZES, INDUSTRIES},
        view_model::LeadGenerationViewModel,
    },
};
use leptos::*;

fn industry_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select industry".to_string())];
    options.extend(options_from(INDUSTRIES));
    options
}

fn size_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Any size".to_string())];
    options.extend(
        COMPANY_SIZES
            .iter()
            .map(|size| (size.to_string(), format!("{size} employees"))),
    );
    options
}

#[component]
pub fn LeadGenerationFormCard(vm: LeadGenerationViewModel) -> impl IntoView {
    let pending = vm.generate_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Card
            title="Generate Real Leads"
            description="Find companies and contacts using free web scraping and email generation."
        >
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <SelectField label="Industry" value=vm.industry options=industry_options() required=true />
                    <TextField label="Location" value=vm.location placeholder="e.g., San Francisco, CA" />
                    <SelectField label="Company Size" value=vm.company_size options=size_options() />
                    <TextField label="Number of Leads" value=vm.limit input_type="number" />
                </div>
                <div class="space-y-2">
                    <p class="text-sm font-bold text-fg-muted ml-1">{"Data Source"}</p>
                    <CheckboxField label="Use real web scraping (recommended)" checked=vm.use_real_data />
                    <p class="text-xs text-fg-muted">{move || data_source_hint(vm.use_real_data.get())}</p>
                </div>
                <InlineErrorMessage error=vm.error.into() />
                <Button
                    class="w-full"
                    button_type="submit"
                    disabled=Signal::derive(move || !vm.can_generate())
                    loading=pending
                >
                    {move || if pending.get() { "Generating Leads..." } else { "Generate Leads" }}
                </Button>
            </form>
        </Card>
    }
}
