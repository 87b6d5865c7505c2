use crate::api::{ApiClient, ApiError, CreateLeadListRequest, LeadList};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeadListsRepository {
    client: Rc<ApiClient>,
}

impl LeadListsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_lists(&self) -> Result<Vec<LeadList>, ApiError> {
        self.client.list_lead_lists().await.map(|res| res.lists)
    }

    pub async fn create_list(&self, request: &CreateLeadListRequest) -> Result<LeadList, ApiError> {
        self.client.create_lead_list(request).await
    }
}
