use crate::{
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::{TextAreaField, TextField},
    },
    pages::lead_lists::view_model::LeadListsViewModel,
};
use leptos::*;

#[component]
pub fn CreateListForm(vm: LeadListsViewModel) -> impl IntoView {
    let pending = vm.create_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Card title="New Lead List" description="Group contacts for a campaign or outreach sequence">
            <form class="space-y-4" on:submit=on_submit>
                <TextField label="List Name" value=vm.name placeholder="e.g., Q1 Prospects" required=true />
                <TextAreaField label="Description" value=vm.description placeholder="Optional" />
                <InlineErrorMessage error=vm.form_error.into() />
                <div class="flex gap-2">
                    <Button button_type="submit" loading=pending>{"Create List"}</Button>
                    <Button
                        variant=ButtonVariant::Outline
                        on:click=move |_| vm.cancel_form()
                    >
                        {"Cancel"}
                    </Button>
                </div>
            </form>
        </Card>
    }
}
