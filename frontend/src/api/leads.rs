use super::{
    client::ApiClient,
    types::{ApiError, LeadGenerationRequest, LeadGenerationResponse},
};

impl ApiClient {
    pub async fn generate_industry_leads(
        &self,
        request: &LeadGenerationRequest,
    ) -> Result<LeadGenerationResponse, ApiError> {
        self.post_json("/api/leads/generate/industry", request).await
    }
}
