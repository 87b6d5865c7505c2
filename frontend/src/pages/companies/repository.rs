use crate::api::{ApiClient, ApiError, Company, CompanyQuery, CompanySearchQuery};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// What the companies table is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub enum CompaniesRequest {
    Page { page: u32, per_page: u32 },
    Search(CompanySearchQuery),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompaniesPageData {
    pub companies: Vec<Company>,
    /// Known only for paged listings; search results carry no total.
    pub total: Option<u64>,
}

#[derive(Clone)]
pub struct CompaniesRepository {
    client: Rc<ApiClient>,
}

impl CompaniesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, request: &CompaniesRequest) -> Result<CompaniesPageData, ApiError> {
        match request {
            CompaniesRequest::Page { page, per_page } => {
                let query = CompanyQuery {
                    page: Some(*page),
                    per_page: Some(*per_page),
                };
                let response = self.client.list_companies(&query).await?;
                Ok(CompaniesPageData {
                    companies: response.companies,
                    total: Some(response.total),
                })
            }
            CompaniesRequest::Search(query) => {
                let response = self.client.search_companies(query).await?;
                Ok(CompaniesPageData {
                    companies: response.companies,
                    total: None,
                })
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::fixtures::{api_client, company_json};
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn page_data_round_trips_as_resource_payload() {
        use leptos::Serializable;

        let data = CompaniesPageData {
            companies: vec![Company {
                name: "Acme".into(),
                ..Default::default()
            }],
            total: Some(3),
        };
        let encoded = data.ser().unwrap();
        assert_eq!(CompaniesPageData::de(&encoded).unwrap(), data);
    }

    #[tokio::test]
    async fn page_request_forwards_paging_and_keeps_total() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/companies")
                    .query_param("page", "2")
                    .query_param("per_page", "20");
                then.status(200).json_body(json!({
                    "companies": [company_json("Acme")],
                    "total": 21
                }));
            })
            .await;

        let repo = CompaniesRepository::new_with_client(Rc::new(api_client(&server)));
        let data = repo
            .fetch(&CompaniesRequest::Page { page: 2, per_page: 20 })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(data.total, Some(21));
        assert_eq!(data.companies[0].name, "Acme");
    }

    #[tokio::test]
    async fn search_request_uses_search_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/companies/search")
                    .query_param("industry", "Retail");
                then.status(200).json_body(json!({ "companies": [] }));
            })
            .await;

        let repo = CompaniesRepository::new_with_client(Rc::new(api_client(&server)));
        let data = repo
            .fetch(&CompaniesRequest::Search(CompanySearchQuery {
                industry: Some("Retail".into()),
                ..Default::default()
            }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(data.companies.is_empty());
        assert_eq!(data.total, None);
    }

    #[tokio::test]
    async fn http_failure_is_classified() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/companies");
                then.status(500).json_body(json!({ "error": "database offline" }));
            })
            .await;

        let repo = CompaniesRepository::new_with_client(Rc::new(api_client(&server)));
        let err = repo
            .fetch(&CompaniesRequest::Page { page: 1, per_page: 20 })
            .await
            .unwrap_err();

        assert_eq!(err.code, ApiError::HTTP_STATUS);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.error, "database offline");
    }
}
