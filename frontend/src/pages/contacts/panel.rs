use super::{
    components::{ContactFilters, ContactList},
    view_model::{use_contacts_view_model, CONTACTS_PER_PAGE},
};
use crate::{
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner, PageHeader},
    },
    utils::format::{format_count, page_count},
};
use leptos::*;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let vm = use_contacts_view_model();

    let fetch_error = Signal::derive(move || vm.contacts.get().and_then(|res| res.err()));
    let data = Signal::derive(move || vm.contacts.get().and_then(|res| res.ok()));

    view! {
        <Layout>
            <div class="space-y-6">
                <PageHeader title="Contacts" description="People you can reach at your target companies" />
                <ContactFilters vm=vm />
                <InlineErrorMessage error=fetch_error />
                <Card title="All Contacts">
                    <Show when=move || vm.contacts.loading().get()>
                        <LoadingSpinner />
                    </Show>
                    {move || {
                        data.get().map(|response| {
                            if response.contacts.is_empty() {
                                return view! {
                                    <EmptyState
                                        title="No contacts found"
                                        description="Generate leads or relax your filters"
                                    />
                                }
                                .into_view();
                            }
                            let page = vm.page.get_untracked();
                            let pages = page_count(response.total, CONTACTS_PER_PAGE);
                            view! {
                                <ContactList contacts=response.contacts />
                                <div class="flex items-center justify-between pt-4">
                                    <p class="text-sm text-fg-muted">
                                        {format!("{} contacts, page {} of {}", format_count(response.total), page, pages.max(1))}
                                    </p>
                                    <div class="flex gap-2">
                                        <Button
                                            variant=ButtonVariant::Outline
                                            disabled={page <= 1}
                                            on:click=move |_| vm.page.update(|p| *p = p.saturating_sub(1).max(1))
                                        >
                                            {"Previous"}
                                        </Button>
                                        <Button
                                            variant=ButtonVariant::Outline
                                            disabled={u64::from(page) >= pages}
                                            on:click=move |_| vm.page.update(|p| *p += 1)
                                        >
                                            {"Next"}
                                        </Button>
                                    </div>
                                </div>
                            }
                            .into_view()
                        })
                    }}
                </Card>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_connected_config, ssr::render_to_string};

    #[test]
    fn contacts_page_renders_filters() {
        let html = render_to_string(move || {
            provide_connected_config("http://localhost:5000");
            view! { <ContactsPage /> }
        });
        assert!(html.contains("Contacts"));
        assert!(html.contains("Has email"));
        assert!(html.contains("Has phone"));
        assert!(html.contains("All Contacts"));
    }
}
