use super::{
    components::{CrmGuide, ExportActions, ExportFiltersCard, FieldMappingTable},
    view_model::use_export_view_model,
};
use crate::components::layout::{Layout, PageHeader};
use leptos::*;

#[component]
pub fn ExportPage() -> impl IntoView {
    let vm = use_export_view_model();

    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader title="Export Data" description="Export your leads for CRM integration" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <ExportFiltersCard vm=vm />
                    <ExportActions vm=vm />
                </div>
                <CrmGuide />
                <FieldMappingTable />
            </div>
        </Layout>
    }
}
