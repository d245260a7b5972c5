use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes; blank values count as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_time_base_url() -> Option<String> {
    option_env!("PORTAL_API_URL").and_then(normalize_base_url)
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{normalize_base_url, RuntimeConfig};
    use wasm_bindgen::JsValue;

    const ENV_GLOBAL: &str = "__PORTAL_ENV";
    const CONFIG_GLOBAL: &str = "__PORTAL_CONFIG";

    fn read_global(name: &str, keys: &[&str]) -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .filter(|v| !v.is_undefined() && !v.is_null())
            .find_map(|v| v.as_string())
            .and_then(|v| normalize_base_url(&v))
    }

    // window.__PORTAL_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__PORTAL_CONFIG = { api_base_url: "..." }.
    pub(super) fn snapshot_from_globals() -> Option<String> {
        read_global(ENV_GLOBAL, &["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global(CONFIG_GLOBAL, &["api_base_url", "API_BASE_URL"]))
    }

    pub(super) fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(url), Some(w)) = (&cfg.api_base_url, web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
    }

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::RuntimeConfig;

    pub(super) fn snapshot_from_globals() -> Option<String> {
        None
    }

    pub(super) fn write_window_config(_cfg: &RuntimeConfig) {}

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        log::debug!("API base URL taken from window globals");
        return cache_base_url(&existing);
    }
    if let Some(cfg) = browser::fetch_runtime_config().await {
        browser::write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
            log::debug!("API base URL taken from config.json");
            return cache_base_url(&url);
        }
    }
    if let Some(url) = build_time_base_url() {
        return cache_base_url(&url);
    }
    log::info!(
        "No API base URL configured, falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_and_rejects_blank() {
        assert_eq!(
            normalize_base_url(" https://api.example.org/api/ ").as_deref(),
            Some("https://api.example.org/api")
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn host_resolution_uses_build_time_value_or_default() {
        let expected = build_time_base_url().unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        assert_eq!(await_api_base_url().await, expected);
        // Cached on the second call.
        assert_eq!(await_api_base_url().await, expected);
    }
}
