use crate::{
    api::LeadGenerationResponse,
    components::{
        cards::{Badge, Card},
        common::Button,
    },
    pages::lead_generation::view_model::results_description,
    utils::format::format_count,
};
use leptos::*;

#[component]
pub fn ResultsSummary(
    results: LeadGenerationResponse,
    on_save: Callback<()>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    let source = results
        .search_criteria
        .data_source
        .clone()
        .unwrap_or_else(|| "unknown".to_string());
    let stats = [
        ("Companies", results.total_companies),
        ("Contacts", results.total_contacts),
        ("With Emails", results.contacts_with_email() as u64),
    ];

    view! {
        <Card title="Generation Results" description=results_description(&results)>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {stats
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div>
                            <p class="text-2xl font-bold text-fg">{format_count(value)}</p>
                            <p class="text-sm text-fg-muted">{label}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="flex items-center gap-2">
                <Button on:click=move |_| on_save.call(()) loading=saving>
                    {"Save to Database"}
                </Button>
                <Badge>{format!("Source: {source}")}</Badge>
            </div>
        </Card>
    }
}

const STEPS: &[(&str, &str)] = &[
    (
        "1. Web Scraping",
        "Searches public business directories, company websites, and social media",
    ),
    (
        "2. Email Generation",
        "Generates and verifies email patterns using common business formats",
    ),
    (
        "3. Contact Discovery",
        "Finds decision makers and enriches profiles with LinkedIn and job titles",
    ),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <Card title="How Free Lead Generation Works">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {STEPS
                    .iter()
                    .map(|&(title, body)| view! {
                        <div class="text-center">
                            <h3 class="font-semibold mb-1 text-fg">{title}</h3>
                            <p class="text-sm text-fg-muted">{body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}
