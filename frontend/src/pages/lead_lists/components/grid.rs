use crate::{
    api::LeadList,
    components::{
        cards::{Badge, Card},
        common::Button,
        empty_state::EmptyState,
    },
};
use leptos::*;

#[component]
pub fn LeadListGrid(lists: Vec<LeadList>, on_create: Callback<()>) -> impl IntoView {
    if lists.is_empty() {
        return view! {
            <EmptyState
                title="No lead lists yet"
                description="Lists let you group contacts for campaigns and exports"
            >
                <Button on:click=move |_| on_create.call(())>{"Create your first list"}</Button>
            </EmptyState>
        }
        .into_view();
    }

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            {lists
                .into_iter()
                .map(|list| {
                    let count = format!("{} contacts", list.contact_count.unwrap_or(0));
                    view! {
                        <Card title=list.name>
                            {list.description.map(|d| view! { <p class="text-sm text-fg-muted">{d}</p> })}
                            <Badge>{count}</Badge>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_lists_show_create_first_list() {
        let html = render_to_string(|| {
            view! { <LeadListGrid lists=Vec::new() on_create=Callback::new(|_: ()| ()) /> }
        });
        assert!(html.contains("No lead lists yet"));
        assert!(html.contains("Create your first list"));
    }

    #[test]
    fn lists_render_name_once_with_count() {
        let html = render_to_string(|| {
            let lists = vec![
                LeadList {
                    id: Some(1),
                    name: "Q1 Prospects".into(),
                    description: Some("Inbound from Q1".into()),
                    contact_count: Some(12),
                },
                LeadList {
                    id: Some(2),
                    name: "Partners".into(),
                    ..Default::default()
                },
            ];
            view! { <LeadListGrid lists=lists on_create=Callback::new(|_: ()| ()) /> }
        });
        assert_eq!(html.matches("Q1 Prospects").count(), 1);
        assert!(html.contains("Inbound from Q1"));
        assert!(html.contains("12 contacts"));
        assert!(html.contains("0 contacts"));
        assert!(!html.contains("Create your first list"));
    }
}
