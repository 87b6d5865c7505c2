use crate::api::{ApiClient, ApiError, ContactListResponse, ContactQuery};
use std::rc::Rc;

#[derive(Clone)]
pub struct ContactsRepository {
    client: Rc<ApiClient>,
}

impl ContactsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, query: &ContactQuery) -> Result<ContactListResponse, ApiError> {
        self.client.list_contacts(query).await
    }
}
