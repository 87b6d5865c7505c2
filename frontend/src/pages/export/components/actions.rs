use crate::{
    components::{
        cards::{Badge, Card},
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
    },
    pages::export::{utils::ExportTarget, view_model::ExportViewModel},
};
use leptos::*;

#[component]
pub fn ExportActions(vm: ExportViewModel) -> impl IntoView {
    let busy = vm.busy();
    let template_pending = vm.template_action.pending();

    view! {
        <div class="space-y-6">
            <Card title="Export Contacts" description="Export contacts for email marketing">
                <Button
                    class="w-full"
                    disabled=busy
                    on:click=move |_| vm.export(ExportTarget::Contacts)
                >
                    {move || if busy.get() { "Exporting..." } else { "Export Contacts" }}
                </Button>
                <div class="text-center space-y-1">
                    <Badge>{"CSV Format"}</Badge>
                    <p class="text-xs text-fg-muted">
                        {"Compatible with Zoho CRM, HubSpot, and other CRM systems"}
                    </p>
                </div>
            </Card>
            <Card title="Export Companies" description="Export company database">
                <Button
                    class="w-full"
                    variant=ButtonVariant::Outline
                    disabled=busy
                    on:click=move |_| vm.export(ExportTarget::Companies)
                >
                    {"Export Companies"}
                </Button>
            </Card>
            <Card title="Zoho Import Template" description="Blank CSV with the columns Zoho CRM expects">
                <Button
                    class="w-full"
                    variant=ButtonVariant::Outline
                    loading=template_pending
                    on:click=move |_| vm.download_template()
                >
                    {"Download Template"}
                </Button>
            </Card>
            <InlineErrorMessage error=vm.error.into() />
        </div>
    }
}
