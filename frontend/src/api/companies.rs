use super::{
    client::ApiClient,
    types::{ApiError, Company, CompanyListResponse, CompanyQuery, CompanySearchQuery, CompanySearchResponse},
};

impl ApiClient {
    pub async fn list_companies(&self, query: &CompanyQuery) -> Result<CompanyListResponse, ApiError> {
        self.get_json("/api/companies", &query.params()).await
    }

    pub async fn search_companies(
        &self,
        query: &CompanySearchQuery,
    ) -> Result<CompanySearchResponse, ApiError> {
        self.get_json("/api/companies/search", &query.params()).await
    }

    pub async fn create_company(&self, company: &Company) -> Result<Company, ApiError> {
        self.post_json("/api/companies", company).await
    }
}
