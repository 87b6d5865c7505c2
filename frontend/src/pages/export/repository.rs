use super::utils::ExportTarget;
use crate::api::{ApiClient, ApiError, CsvTemplateResponse, ExportRequest, ExportResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ExportRepository {
    client: Rc<ApiClient>,
}

impl ExportRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn export(
        &self,
        target: ExportTarget,
        request: &ExportRequest,
    ) -> Result<ExportResponse, ApiError> {
        match target {
            ExportTarget::Contacts => self.client.export_contacts_csv(request).await,
            ExportTarget::Companies => self.client.export_companies_csv(request).await,
        }
    }

    pub async fn zoho_template(&self) -> Result<CsvTemplateResponse, ApiError> {
        self.client.zoho_template().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::{test_support::fixtures::api_client, ExportFilters},
        pages::export::utils::{export_request, ExportFormat},
    };
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn companies_export_posts_filters_and_format() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/export/companies/csv")
                    .json_body(json!({
                        "filters": { "has_email": true, "has_phone": false, "min_score": 50 },
                        "zoho_format": false
                    }));
                then.status(200).json_body(json!({
                    "csv_data": "Name\nAcme\n",
                    "filename": "companies.csv",
                    "total_companies": 1
                }));
            })
            .await;

        let repo = ExportRepository::new_with_client(Rc::new(api_client(&server)));
        let request = export_request(
            ExportFilters {
                min_score: 50,
                ..Default::default()
            },
            ExportFormat::HubSpot,
        );
        let response = repo.export(ExportTarget::Companies, &request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.record_count(), 1);
        assert_eq!(response.filename, "companies.csv");
    }

    #[tokio::test]
    async fn export_failure_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/export/contacts/csv");
                then.status(503);
            })
            .await;

        let repo = ExportRepository::new_with_client(Rc::new(api_client(&server)));
        let request = export_request(ExportFilters::default(), ExportFormat::Zoho);
        let err = repo
            .export(ExportTarget::Contacts, &request)
            .await
            .unwrap_err();

        assert_eq!(err.code, ApiError::HTTP_STATUS);
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn template_is_fetched() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/export/zoho-template");
                then.status(200).json_body(json!({
                    "csv_data": "First Name,Last Name,Email\n",
                    "filename": "zoho_import_template.csv"
                }));
            })
            .await;

        let repo = ExportRepository::new_with_client(Rc::new(api_client(&server)));
        let template = repo.zoho_template().await.unwrap();
        assert!(template.csv_data.starts_with("First Name"));
    }
}
