use super::{
    components::{CompanyPager, CompanySearchForm, CompanyTable},
    repository::CompaniesRequest,
    view_model::use_companies_view_model,
};
use crate::components::{
    cards::Card,
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner, PageHeader},
};
use leptos::*;

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let vm = use_companies_view_model();

    let fetch_error = Signal::derive(move || vm.companies.get().and_then(|res| res.err()));
    let data = Signal::derive(move || vm.companies.get().and_then(|res| res.ok()));
    let on_page = Callback::new(move |page: u32| vm.go_to_page(page));

    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader title="Companies" description="Browse and search companies in your database" />
                <CompanySearchForm vm=vm />
                <InlineErrorMessage error=fetch_error />
                <Card title="All Companies">
                    <Show when=move || vm.companies.loading().get()>
                        <LoadingSpinner />
                    </Show>
                    {move || {
                        data.get().map(|result| {
                            if result.companies.is_empty() {
                                return view! {
                                    <EmptyState
                                        title="No companies found"
                                        description="Generate leads or adjust your search filters"
                                    />
                                }
                                .into_view();
                            }
                            let pager = match (vm.request.get(), result.total) {
                                (CompaniesRequest::Page { page, per_page }, Some(total)) => Some(view! {
                                    <CompanyPager page=page per_page=per_page total=total on_page=on_page />
                                }),
                                _ => None,
                            };
                            view! {
                                <CompanyTable companies=result.companies />
                                {pager}
                            }
                            .into_view()
                        })
                    }}
                </Card>
            </div>
        </Layout>
    }
}
