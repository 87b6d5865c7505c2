#![cfg(not(coverage))]

use super::test_support::fixtures::*;
use super::*;
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn api_client_read_endpoints_decode_typed_envelopes() {
    let server = MockServer::start_async().await;

    server.mock_async(|when, then| {
        when.method(GET).path("/health");
        then.status(200).json_body(json!({ "status": "ok" }));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET)
            .path("/api/companies")
            .query_param("per_page", "1");
        then.status(200).json_body(json!({
            "companies": [company_json("Acme")],
            "total": 42
        }));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET)
            .path("/api/companies/search")
            .query_param("industry", "Technology")
            .query_param("location", "Austin");
        then.status(200)
            .json_body(json!({ "companies": [company_json("Acme")] }));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET)
            .path("/api/contacts")
            .query_param("has_email", "true")
            .query_param("per_page", "1");
        then.status(200).json_body(json!({
            "contacts": [contact_json("Ada", "Lovelace", "2025-01-02T10:00:00Z")],
            "total": 17
        }));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET).path("/api/lists");
        then.status(200)
            .json_body(json!({ "lists": [list_json("Q1 Prospects")] }));
    }).await;
    server.mock_async(|when, then| {
        when.method(GET).path("/api/export/zoho-template");
        then.status(200).json_body(json!({
            "csv_data": "First Name,Last Name\n",
            "filename": "zoho_template.csv"
        }));
    }).await;

    let client = api_client(&server);
    client.health().await.unwrap();

    let companies = client
        .list_companies(&CompanyQuery {
            per_page: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(companies.total, 42);
    assert_eq!(companies.companies[0].name, "Acme");

    let found = client
        .search_companies(&CompanySearchQuery {
            industry: Some("Technology".into()),
            location: Some("Austin".into()),
            size: Some("  ".into()),
        })
        .await
        .unwrap();
    assert_eq!(found.companies.len(), 1);

    let with_email = client
        .list_contacts(&ContactQuery {
            has_email: Some(true),
            per_page: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(with_email.total, 17);
    assert_eq!(with_email.contacts[0].full_name(), "Ada Lovelace");

    let lists = client.list_lead_lists().await.unwrap();
    assert_eq!(lists.lists[0].name, "Q1 Prospects");

    let template = client.zoho_template().await.unwrap();
    assert_eq!(template.filename, "zoho_template.csv");
}

#[tokio::test]
async fn api_client_write_endpoints_send_expected_payloads() {
    let server = MockServer::start_async().await;

    let create_list = server.mock_async(|when, then| {
        when.method(POST)
            .path("/api/lists")
            .json_body(json!({ "name": "Q1 Prospects", "description": null }));
        then.status(201).json_body(list_json("Q1 Prospects"));
    }).await;
    let generate = server.mock_async(|when, then| {
        when.method(POST)
            .path("/api/leads/generate/industry")
            .json_body(json!({
                "industry": "Technology",
                "location": "Austin, TX",
                "company_size": "",
                "limit": 50,
                "use_real_data": true
            }));
        then.status(200).json_body(json!({
            "companies": [company_json("Acme")],
            "contacts": [contact_json("Ada", "Lovelace", "2025-01-02T10:00:00Z")],
            "total_companies": 1,
            "total_contacts": 1,
            "search_criteria": { "industry": "Technology", "data_source": "web_scraping" }
        }));
    }).await;
    let export = server.mock_async(|when, then| {
        when.method(POST)
            .path("/api/export/contacts/csv")
            .json_body(json!({
                "filters": { "has_email": true, "has_phone": false, "min_score": 0 },
                "zoho_format": true
            }));
        then.status(200).json_body(json!({
            "csv_data": "a,b\n1,2",
            "filename": "contacts.csv",
            "total_contacts": 2
        }));
    }).await;
    let create_company = server.mock_async(|when, then| {
        when.method(POST).path("/api/companies");
        then.status(201).json_body(company_json("Acme"));
    }).await;

    let client = api_client(&server);

    let created = client
        .create_lead_list(&CreateLeadListRequest {
            name: "Q1 Prospects".into(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Q1 Prospects");

    let leads = client
        .generate_industry_leads(&LeadGenerationRequest {
            industry: "Technology".into(),
            location: "Austin, TX".into(),
            company_size: String::new(),
            limit: 50,
            use_real_data: true,
        })
        .await
        .unwrap();
    assert_eq!(leads.total_companies, 1);
    assert_eq!(leads.contacts_with_email(), 1);
    assert_eq!(
        leads.search_criteria.data_source.as_deref(),
        Some("web_scraping")
    );

    let exported = client
        .export_contacts_csv(&ExportRequest {
            filters: ExportFilters::default(),
            zoho_format: true,
        })
        .await
        .unwrap();
    assert_eq!(exported.record_count(), 2);

    let saved = client.create_company(&leads.companies[0]).await.unwrap();
    assert_eq!(saved.name, "Acme");

    create_list.assert_async().await;
    generate.assert_async().await;
    export.assert_async().await;
    create_company.assert_async().await;
}

#[tokio::test]
async fn non_success_status_uses_backend_error_message() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(POST).path("/api/export/companies/csv");
        then.status(500)
            .json_body(json!({ "error": "Export backend unavailable" }));
    }).await;

    let err = api_client(&server)
        .export_companies_csv(&ExportRequest {
            filters: ExportFilters::default(),
            zoho_format: false,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ApiError::HTTP_STATUS);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.error, "Export backend unavailable");
}

#[tokio::test]
async fn non_success_status_without_body_falls_back_to_reason() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/health");
        then.status(503);
    }).await;

    let err = api_client(&server).health().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.error.starts_with("503"));
}

#[tokio::test]
async fn malformed_json_is_a_decode_failure() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/api/lists");
        then.status(200).body("<html>not json</html>");
    }).await;

    let err = api_client(&server).list_lead_lists().await.unwrap_err();
    assert_eq!(err.code, ApiError::DECODE_FAILED);
}

#[tokio::test]
async fn missing_total_is_a_contract_mismatch() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/api/companies");
        then.status(200).json_body(json!([company_json("Acme")]));
    }).await;

    let err = api_client(&server)
        .list_companies(&CompanyQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ApiError::DECODE_FAILED);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/health");
        then.status(200).delay(Duration::from_millis(1500));
    }).await;

    let err = api_client_with_timeout(&server, Duration::from_millis(100))
        .health()
        .await
        .unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn stalled_body_times_out() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let head = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"lists\":";
        socket.write_all(head.as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let client = ApiClient::new(format!("http://{}", addr)).with_timeout(Duration::from_millis(200));
    let started = std::time::Instant::now();
    let err = tokio::time::timeout(Duration::from_secs(3), client.list_lead_lists())
        .await
        .expect("client timeout should fire before the body completes")
        .unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {:?}", err);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn unreachable_backend_is_a_request_failure() {
    let client = ApiClient::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2));
    let err = client.health().await.unwrap_err();
    assert!(
        err.code == ApiError::REQUEST_FAILED || err.is_timeout(),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn new_client_normalizes_base_url() {
    assert_eq!(
        ApiClient::new("http://localhost:5000/").base_url(),
        "http://localhost:5000"
    );
    assert_eq!(ApiClient::new("   ").base_url(), crate::config::DEFAULT_API_BASE_URL);
    assert_eq!(ApiClient::default().timeout(), DEFAULT_REQUEST_TIMEOUT);
}
