use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub backend_url: Option<String>,
    pub anon_key: Option<String>,
}

/// Fully resolved connection settings for the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEndpoint {
    pub url: String,
    pub anon_key: String,
}

impl BackendEndpoint {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }
}

impl RuntimeConfig {
    fn is_complete(&self) -> bool {
        self.backend_url.is_some() && self.anon_key.is_some()
    }

    /// Fills missing fields from `other`, keeping values already present.
    fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            backend_url: self.backend_url.or(other.backend_url),
            anon_key: self.anon_key.or(other.anon_key),
        }
    }

    fn into_endpoint(self) -> BackendEndpoint {
        BackendEndpoint::new(
            self.backend_url
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            self.anon_key.unwrap_or_default(),
        )
    }
}

static ENDPOINT: OnceLock<BackendEndpoint> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            backend_url: read_key(&obj, &["BACKEND_URL", "backend_url"]),
            anon_key: read_key(&obj, &["ANON_KEY", "anon_key"]),
        })
    }

    // window.__ADVISORIES_ENV (env.js) wins over window.__ADVISORIES_CONFIG.
    pub fn snapshot() -> RuntimeConfig {
        let env = read_global("__ADVISORIES_ENV").unwrap_or_default();
        let cfg = read_global("__ADVISORIES_CONFIG").unwrap_or_default();
        env.merge(cfg)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> RuntimeConfig {
        RuntimeConfig::default()
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json not served (status {})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    format!("{}/config.json", DEFAULT_BACKEND_URL)
}

pub async fn await_endpoint() -> BackendEndpoint {
    if let Some(cached) = ENDPOINT.get() {
        return cached.clone();
    }
    let mut config = globals::snapshot();
    if !config.is_complete() {
        if let Some(fetched) = fetch_runtime_config().await {
            config = config.merge(fetched);
        }
    }
    if config.anon_key.is_none() {
        log::warn!("No anon key configured; backend requests will be rejected");
    }
    ENDPOINT.get_or_init(|| config.into_endpoint()).clone()
}

pub async fn init() {
    let endpoint = await_endpoint().await;
    log::info!("Runtime config initialized (backend: {})", endpoint.url);
}
