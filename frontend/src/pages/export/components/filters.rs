use crate::{
    components::{
        cards::Card,
        forms::{CheckboxField, SelectField},
    },
    pages::export::{
        utils::{ExportFormat, MIN_SCORE_OPTIONS},
        view_model::ExportViewModel,
    },
};
use leptos::*;

fn score_options() -> Vec<(String, String)> {
    MIN_SCORE_OPTIONS
        .iter()
        .map(|(score, label)| (score.to_string(), label.to_string()))
        .collect()
}

fn format_options() -> Vec<(String, String)> {
    ExportFormat::ALL
        .iter()
        .map(|f| (f.as_str().to_string(), f.label().to_string()))
        .collect()
}

#[component]
pub fn ExportFiltersCard(vm: ExportViewModel) -> impl IntoView {
    view! {
        <Card title="Export Filters" description="Choose which contacts to include">
            <div class="space-y-4">
                <CheckboxField label="Only contacts with email" checked=vm.has_email />
                <CheckboxField label="Only contacts with phone" checked=vm.has_phone />
                <SelectField label="Minimum Lead Score" value=vm.min_score options=score_options() />
                <SelectField label="Export Format" value=vm.format options=format_options() />
            </div>
        </Card>
    }
}
