use super::{
    client::ApiClient,
    types::{ApiError, CreateLeadListRequest, LeadList, LeadListsResponse},
};

impl ApiClient {
    pub async fn list_lead_lists(&self) -> Result<LeadListsResponse, ApiError> {
        self.get_json("/api/lists", &[]).await
    }

    pub async fn create_lead_list(&self, request: &CreateLeadListRequest) -> Result<LeadList, ApiError> {
        self.post_json("/api/lists", request).await
    }
}
