use super::{
    client::ApiClient,
    types::{ApiError, CsvTemplateResponse, ExportRequest, ExportResponse},
};

impl ApiClient {
    pub async fn export_contacts_csv(&self, request: &ExportRequest) -> Result<ExportResponse, ApiError> {
        self.post_json("/api/export/contacts/csv", request).await
    }

    pub async fn export_companies_csv(&self, request: &ExportRequest) -> Result<ExportResponse, ApiError> {
        self.post_json("/api/export/companies/csv", request).await
    }

    pub async fn zoho_template(&self) -> Result<CsvTemplateResponse, ApiError> {
        self.get_json("/api/export/zoho-template", &[]).await
    }
}
