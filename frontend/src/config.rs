use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Shape of `./config.json` served next to the bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

/// Trims the value and strips trailing slashes; blank or missing values fall
/// back to [`DEFAULT_API_BASE_URL`].
pub fn normalize_base_url(value: Option<&str>) -> String {
    let trimmed = value.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    /// Reads `window.__LEADDB_ENV = { API_BASE_URL: "..." }` written by `env.js`.
    pub fn from_env_js() -> Option<String> {
        let w = window()?;
        let any = js_sys::Reflect::get(&w, &"__LEADDB_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok())
            .and_then(|v| v.as_string())
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

/// Resolves the backend base URL once at startup. The result is handed to the
/// app root and provided through context; nothing caches it globally.
#[cfg(target_arch = "wasm32")]
pub async fn resolve_api_base_url() -> String {
    if let Some(url) = browser::from_env_js() {
        log::debug!("API base URL from env.js");
        return normalize_base_url(Some(&url));
    }
    if let Some(cfg) = browser::fetch_runtime_config().await {
        log::debug!("API base URL from config.json");
        return normalize_base_url(cfg.api_base_url.as_deref());
    }
    log::warn!(
        "No API base URL configured, using {}",
        DEFAULT_API_BASE_URL
    );
    DEFAULT_API_BASE_URL.to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn resolve_api_base_url() -> String {
    normalize_base_url(std::env::var("LEADDB_API_URL").ok().as_deref())
}
