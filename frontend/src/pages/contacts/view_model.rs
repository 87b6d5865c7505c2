use super::repository::ContactsRepository;
use crate::{
    api::{ApiClient, ApiError, ContactListResponse, ContactQuery},
    state::config::use_api_client,
};
use leptos::*;
use std::rc::Rc;

pub const CONTACTS_PER_PAGE: u32 = 25;

/// An unchecked filter means "don't care", not "must be missing".
pub fn contact_query(page: u32, only_with_email: bool, only_with_phone: bool) -> ContactQuery {
    ContactQuery {
        page: Some(page.max(1)),
        per_page: Some(CONTACTS_PER_PAGE),
        has_email: only_with_email.then_some(true),
        has_phone: only_with_phone.then_some(true),
        ..Default::default()
    }
}

#[derive(Clone, Copy)]
pub struct ContactsViewModel {
    pub only_with_email: RwSignal<bool>,
    pub only_with_phone: RwSignal<bool>,
    pub page: RwSignal<u32>,
    pub query: Memo<ContactQuery>,
    pub contacts: Resource<(ApiClient, ContactQuery), Result<ContactListResponse, ApiError>>,
}

impl ContactsViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let only_with_email = create_rw_signal(false);
        let only_with_phone = create_rw_signal(false);
        let page = create_rw_signal(1u32);

        let query = create_memo(move |_| {
            contact_query(page.get(), only_with_email.get(), only_with_phone.get())
        });

        let contacts = create_resource(
            move || (api.get(), query.get()),
            move |(client, query)| async move {
                ContactsRepository::new_with_client(Rc::new(client))
                    .fetch(&query)
                    .await
            },
        );

        // A filter change starts again from the first page.
        create_effect(move |prev: Option<(bool, bool)>| {
            let filters = (only_with_email.get(), only_with_phone.get());
            if prev.is_some_and(|p| p != filters) {
                page.set(1);
            }
            filters
        });

        Self {
            only_with_email,
            only_with_phone,
            page,
            query,
            contacts,
        }
    }
}

pub fn use_contacts_view_model() -> ContactsViewModel {
    match use_context::<ContactsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ContactsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
