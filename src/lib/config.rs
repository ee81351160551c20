//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.PB_CONFIG` (if present) so static deployments
//! can change behavior without rebuilding. Configuration values are public;
//! do not store secrets here.

use crate::app_lib::AppError;

/// Shown on auth routes when the demo account flow is switched off.
pub const DEMO_AUTH_DISABLED_MESSAGE: &str = "Accounts are not available in this build yet.";

/// Default interval between research status messages (milliseconds).
pub const DEFAULT_RESEARCH_STATUS_INTERVAL_MS: u32 = 2_500;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub log_level: String,
    /// Enables the plaintext local-storage account flow. Defaults to on only in
    /// debug builds.
    pub demo_auth: bool,
    pub research_status_interval_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("PB_LOG_LEVEL"),
            option_env!("PB_DEMO_AUTH"),
            option_env!("PB_RESEARCH_STATUS_INTERVAL_MS"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Fails with `AppError::Config` when the demo account flow is disabled.
    pub fn require_demo_auth(&self) -> Result<(), AppError> {
        if self.demo_auth {
            Ok(())
        } else {
            Err(AppError::Config(DEMO_AUTH_DISABLED_MESSAGE.to_string()))
        }
    }

    fn from_build_env(
        log_level: Option<&str>,
        demo_auth: Option<&str>,
        interval_ms: Option<&str>,
    ) -> Self {
        Self {
            log_level: log_level
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            demo_auth: demo_auth
                .and_then(parse_flag)
                .unwrap_or(cfg!(debug_assertions)),
            research_status_interval_ms: interval_ms
                .and_then(parse_interval)
                .unwrap_or(DEFAULT_RESEARCH_STATUS_INTERVAL_MS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env(None, None, None)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    log_level: Option<String>,
    demo_auth: Option<bool>,
    research_status_interval_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
    if let Some(value) = runtime.demo_auth {
        config.demo_auth = value;
    }
    if let Some(value) = runtime.research_status_interval_ms {
        config.research_status_interval_ms = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PB_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        log_level: read_runtime_string(&object, "log_level")
            .as_deref()
            .and_then(normalize_runtime_value),
        demo_auth: read_runtime_flag(&object, "demo_auth"),
        research_status_interval_ms: read_runtime_interval(&object, "research_status_interval_ms"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<wasm_bindgen::JsValue> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    if value.is_null() || value.is_undefined() {
        None
    } else {
        Some(value)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_string(object: &js_sys::Object, key: &str) -> Option<String> {
    read_runtime_value(object, key)?.as_string()
}

// Accepts either a JS boolean or a string such as "false".
#[cfg(target_arch = "wasm32")]
fn read_runtime_flag(object: &js_sys::Object, key: &str) -> Option<bool> {
    let value = read_runtime_value(object, key)?;
    value
        .as_bool()
        .or_else(|| value.as_string().as_deref().and_then(parse_flag))
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_interval(object: &js_sys::Object, key: &str) -> Option<u32> {
    let value = read_runtime_value(object, key)?;
    match value.as_f64() {
        Some(number) if number.is_finite() && number >= 1.0 && number <= f64::from(u32::MAX) => {
            Some(number as u32)
        }
        Some(_) => None,
        None => value.as_string().as_deref().and_then(parse_interval),
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_interval(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|interval| *interval > 0)
}
