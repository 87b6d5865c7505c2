use crate::{api::ApiClient, config};
use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "Checking...",
            ApiStatus::Connected => "Connected",
            ApiStatus::Disconnected => "Disconnected",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigState {
    pub api_base_url: String,
    pub api_status: ApiStatus,
}

impl ConfigState {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: config::normalize_base_url(Some(api_base_url)),
            api_status: ApiStatus::Checking,
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::new(config::DEFAULT_API_BASE_URL)
    }
}

pub fn provide_config(api_base_url: &str) -> (ReadSignal<ConfigState>, WriteSignal<ConfigState>) {
    let (read, write) = create_signal(ConfigState::new(api_base_url));
    provide_context((read, write));
    (read, write)
}

pub fn use_config() -> (ReadSignal<ConfigState>, WriteSignal<ConfigState>) {
    match use_context::<(ReadSignal<ConfigState>, WriteSignal<ConfigState>)>() {
        Some(ctx) => ctx,
        None => provide_config(config::DEFAULT_API_BASE_URL),
    }
}

/// Client bound to the configured base URL. Only changes (and so only
/// re-triggers dependants) when the base URL itself changes.
pub fn use_api_client() -> Memo<ApiClient> {
    let (config, _) = use_config();
    create_memo(move |_| config.with(|c| ApiClient::new(&c.api_base_url)))
}

/// Applies a new base URL; the status goes back to `Checking` until the next
/// health probe settles.
pub fn set_api_base_url(set_state: WriteSignal<ConfigState>, value: &str) {
    let normalized = config::normalize_base_url(Some(value));
    set_state.update(|s| {
        if s.api_base_url != normalized {
            log::info!("API base URL changed to {}", normalized);
            s.api_base_url = normalized;
            s.api_status = ApiStatus::Checking;
        }
    });
}

pub async fn check_health(api: &ApiClient, set_state: WriteSignal<ConfigState>) {
    let base_url = api.base_url().to_string();
    set_state.update(|s| {
        if s.api_base_url == base_url {
            s.api_status = ApiStatus::Checking;
        }
    });
    let status = match api.health().await {
        Ok(()) => ApiStatus::Connected,
        Err(err) => {
            log::warn!("Health check against {} failed: {}", base_url, err);
            ApiStatus::Disconnected
        }
    };
    // A probe for a URL that has since been replaced must not win.
    set_state.try_update(|s| {
        if s.api_base_url == base_url {
            s.api_status = status;
        }
    });
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::fixtures::api_client;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn check_health_marks_connected_and_disconnected() {
        let runtime = create_runtime();
        let up = MockServer::start_async().await;
        up.mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200);
        })
        .await;
        let down = MockServer::start_async().await;
        down.mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(500);
        })
        .await;

        let (read, write) = provide_config(&up.base_url());
        check_health(&api_client(&up), write).await;
        assert_eq!(read.get_untracked().api_status, ApiStatus::Connected);

        set_api_base_url(write, &down.base_url());
        check_health(&api_client(&down), write).await;
        assert_eq!(read.get_untracked().api_status, ApiStatus::Disconnected);

        runtime.dispose();
    }

    #[tokio::test]
    async fn stale_probe_does_not_overwrite_new_url_status() {
        let runtime = create_runtime();
        let old = MockServer::start_async().await;
        old.mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200);
        })
        .await;

        let (read, write) = provide_config("http://new.test");
        check_health(&api_client(&old), write).await;
        assert_eq!(read.get_untracked().api_status, ApiStatus::Checking);

        runtime.dispose();
    }
}
