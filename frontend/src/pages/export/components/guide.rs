use crate::{
    components::cards::Card,
    pages::export::utils::{FIELD_MAPPINGS, HUBSPOT_STEPS, ZOHO_STEPS},
};
use leptos::*;

#[component]
fn GuideSteps(title: &'static str, steps: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h3 class="font-semibold text-fg">{title}</h3>
            <ol class="text-sm text-fg-muted space-y-1">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| view! { <li>{format!("{}. {}", i + 1, step)}</li> })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
pub fn CrmGuide() -> impl IntoView {
    view! {
        <Card title="CRM Integration Guide" description="Import your exported leads into a CRM">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <GuideSteps title="Zoho CRM" steps=ZOHO_STEPS />
                <GuideSteps title="HubSpot" steps=HUBSPOT_STEPS />
            </div>
        </Card>
    }
}

#[component]
pub fn FieldMappingTable() -> impl IntoView {
    view! {
        <Card title="Field Mapping Reference" description="How LeadDB fields map to CRM fields">
            <div class="overflow-x-auto">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="border-b border-border">
                            <th class="text-left py-2">{"LeadDB Field"}</th>
                            <th class="text-left py-2">{"Zoho CRM Field"}</th>
                            <th class="text-left py-2">{"HubSpot Field"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {FIELD_MAPPINGS
                            .iter()
                            .map(|&(field, zoho, hubspot)| view! {
                                <tr class="border-b border-border">
                                    <td class="py-2 font-mono">{field}</td>
                                    <td class="py-2">{zoho}</td>
                                    <td class="py-2">{hubspot}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </Card>
    }
}
