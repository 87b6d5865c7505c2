use super::{
    client::ApiClient,
    types::{ApiError, Contact, ContactListResponse, ContactQuery},
};

impl ApiClient {
    pub async fn list_contacts(&self, query: &ContactQuery) -> Result<ContactListResponse, ApiError> {
        self.get_json("/api/contacts", &query.params()).await
    }

    pub async fn create_contact(&self, contact: &Contact) -> Result<Contact, ApiError> {
        self.post_json("/api/contacts", contact).await
    }
}
