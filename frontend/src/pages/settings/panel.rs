use super::view_model::use_settings_view_model;
use crate::{
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::TextField,
        layout::{ApiStatusBadge, Layout, PageHeader, SuccessMessage},
    },
    config::DEFAULT_API_BASE_URL,
};
use leptos::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let vm = use_settings_view_model();
    let probing = vm.probe_action.pending();
    let probe_result = vm.probe_action.value();
    let probe_error = Signal::derive(move || probe_result.get().and_then(|res| res.err()));
    let probe_ok = move || matches!(probe_result.get(), Some(Ok(())));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.apply();
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader title="Settings" description="Configure how LeadDB reaches its backend" />
                <Card title="Backend Connection" description=format!("Default: {DEFAULT_API_BASE_URL}")>
                    <div class="flex items-center justify-between text-sm">
                        <span class="text-fg-muted">
                            {"Current API: "}
                            <span class="font-mono text-fg">{move || vm.config.with(|c| c.api_base_url.clone())}</span>
                        </span>
                        <ApiStatusBadge />
                    </div>
                    <form class="space-y-4" on:submit=on_submit>
                        <TextField label="API Base URL" value=vm.draft placeholder=DEFAULT_API_BASE_URL required=true />
                        <div class="flex flex-wrap gap-2">
                            <Button button_type="submit" disabled=Signal::derive(move || !vm.is_dirty())>
                                {"Apply"}
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                loading=probing
                                on:click=move |_| vm.test_draft()
                            >
                                {"Test Connection"}
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                on:click=move |_| vm.reset()
                            >
                                {"Reset to Default"}
                            </Button>
                        </div>
                    </form>
                    <Show when=probe_ok>
                        <SuccessMessage message="Backend responded to the health check" />
                    </Show>
                    <InlineErrorMessage error=probe_error />
                </Card>
            </div>
        </Layout>
    }
}
