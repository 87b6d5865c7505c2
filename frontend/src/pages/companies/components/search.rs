use crate::{
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
        forms::{options_from, SelectField, TextField},
    },
    pages::{
        companies::view_model::CompaniesViewModel,
        lead_generation::utils::{COMPANY_SIZES, INDUSTRIES},
    },
};
use leptos::*;

fn any_of(label: &str, values: &[&str]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), label.to_string())];
    options.extend(options_from(values));
    options
}

#[component]
pub fn CompanySearchForm(vm: CompaniesViewModel) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.search();
    };

    view! {
        <Card title="Search Companies" description="Filter by industry, location or size">
            <form class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end" on:submit=on_submit>
                <SelectField
                    label="Industry"
                    value=vm.industry
                    options=any_of("Any industry", INDUSTRIES)
                />
                <TextField label="Location" value=vm.location placeholder="e.g., San Francisco, CA" />
                <SelectField
                    label="Company Size"
                    value=vm.size
                    options=any_of("Any size", COMPANY_SIZES)
                />
                <div class="flex gap-2">
                    <Button button_type="submit">{"Search"}</Button>
                    <Button
                        variant=ButtonVariant::Outline
                        on:click=move |_| vm.clear()
                    >
                        {"Clear"}
                    </Button>
                </div>
            </form>
        </Card>
    }
}
