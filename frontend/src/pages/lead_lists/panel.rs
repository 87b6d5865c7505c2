use super::{
    components::{CreateListForm, LeadListGrid},
    view_model::use_lead_lists_view_model,
};
use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner, PageHeader},
};
use leptos::*;

#[component]
pub fn LeadListsPage() -> impl IntoView {
    let vm = use_lead_lists_view_model();

    let fetch_error = Signal::derive(move || vm.lists.get().and_then(|res| res.err()));
    let on_create = Callback::new(move |_: ()| vm.open_form());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <PageHeader title="Lead Lists" description="Organize contacts into targeted lists" />
                    <Show when=move || !vm.show_form.get()>
                        <Button on:click=move |_| vm.open_form()>{"New List"}</Button>
                    </Show>
                </div>
                <Show when=move || vm.show_form.get()>
                    <CreateListForm vm=vm />
                </Show>
                <InlineErrorMessage error=fetch_error />
                <Show when=move || vm.lists.loading().get()>
                    <LoadingSpinner />
                </Show>
                {move || {
                    vm.lists
                        .get()
                        .and_then(|res| res.ok())
                        .map(|lists| view! { <LeadListGrid lists=lists on_create=on_create /> })
                }}
            </div>
        </Layout>
    }
}
