use super::{
    components::{
        CompaniesPreview, ContactsPreview, HowItWorks, LeadGenerationFormCard, ResultsSummary,
    },
    view_model::use_lead_generation_view_model,
};
use crate::components::{
    cards::{Badge, BadgeTone},
    layout::{Layout, PageHeader},
};
use leptos::*;

#[component]
pub fn LeadGenerationPage() -> impl IntoView {
    let vm = use_lead_generation_view_model();
    let saving = vm.save_action.pending();
    let on_save = Callback::new(move |_: ()| vm.save());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center gap-3">
                    <PageHeader title="Lead Generation" />
                    <Badge tone=BadgeTone::Success>{"FREE Real Data"}</Badge>
                </div>
                <LeadGenerationFormCard vm=vm />
                {move || {
                    vm.results.get().map(|results| {
                        let companies = results.companies.clone();
                        let contacts = results.contacts.clone();
                        view! {
                            <div class="space-y-6">
                                <ResultsSummary results=results on_save=on_save saving=saving />
                                <CompaniesPreview companies=companies />
                                <ContactsPreview contacts=contacts />
                            </div>
                        }
                    })
                }}
                <HowItWorks />
            </div>
        </Layout>
    }
}
