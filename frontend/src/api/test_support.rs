//! Fixtures shared by the host-side API, aggregator and page tests.
pub mod fixtures {
    use crate::api::ApiClient;
    use httpmock::MockServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    pub fn api_client(server: &MockServer) -> ApiClient {
        ApiClient::new(server.base_url())
    }

    pub fn api_client_with_timeout(server: &MockServer, timeout: Duration) -> ApiClient {
        api_client(server).with_timeout(timeout)
    }

    pub fn company_json(name: &str) -> Value {
        json!({
            "id": 1,
            "name": name,
            "industry": "Technology",
            "size": "10-50",
            "location": "Austin, TX",
            "website": "https://acme.example.com"
        })
    }

    pub fn contact_json(first: &str, last: &str, created_at: &str) -> Value {
        json!({
            "id": 7,
            "first_name": first,
            "last_name": last,
            "email": format!("{}@example.com", first.to_lowercase()),
            "phone": null,
            "job_title": "VP Sales",
            "company_name": "Acme",
            "lead_score": 82,
            "created_at": created_at
        })
    }

    pub fn list_json(name: &str) -> Value {
        json!({
            "id": 3,
            "name": name,
            "description": null,
            "contact_count": 0
        })
    }

    pub fn total_json(key: &str, total: u64) -> Value {
        let mut body = json!({ "total": total });
        body[key] = json!([]);
        body
    }
}
