use crate::{
    components::{cards::Card, forms::CheckboxField},
    pages::contacts::view_model::ContactsViewModel,
};
use leptos::*;

#[component]
pub fn ContactFilters(vm: ContactsViewModel) -> impl IntoView {
    view! {
        <Card title="Filters">
            <div class="flex flex-wrap gap-6">
                <CheckboxField label="Has email" checked=vm.only_with_email />
                <CheckboxField label="Has phone" checked=vm.only_with_phone />
            </div>
        </Card>
    }
}
