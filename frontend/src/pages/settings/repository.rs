use crate::api::{ApiClient, ApiError};

/// Probes `base_url` without touching the applied configuration.
pub async fn probe_backend(base_url: String) -> Result<(), ApiError> {
    ApiClient::new(base_url).health().await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::probe_backend;
    use crate::api::ApiError;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn probe_succeeds_against_healthy_backend() {
        let server = MockServer::start_async().await;
        let health = server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(200).json_body(json!({ "status": "ok" }));
            })
            .await;

        probe_backend(format!("{}/", server.base_url()))
            .await
            .expect("probe");
        health.assert_async().await;
    }

    #[tokio::test]
    async fn probe_reports_unhealthy_backend() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(500);
            })
            .await;

        let err = probe_backend(server.base_url()).await.unwrap_err();
        assert_eq!(err.code, ApiError::HTTP_STATUS);
    }
}
