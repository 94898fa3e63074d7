//! Viewer configuration.
//!
//! The host page may pass a JSON object in the `data-viewer-config` attribute
//! of the mount element. Missing fields fall back to the embedded defaults.

use contracts::domain::a001_generated_result::DEFAULT_PACKAGE_NAME;
use contracts::shared::notification::NotificationTimings;
use serde::Deserialize;

/// Where the archive builder comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundlerSource {
    /// JSZip fetched from `library_url` on first export.
    Cdn,
    /// Archive built in-process by the wasm module.
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub bundler: BundlerSource,
    pub library_url: String,
    pub library_global: String,
    pub package_name: String,
    pub notification: NotificationTimings,
}

pub const DEFAULT_LIBRARY_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/jszip/3.10.1/jszip.min.js";

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            bundler: BundlerSource::Cdn,
            library_url: DEFAULT_LIBRARY_URL.to_string(),
            library_global: "JSZip".to_string(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            notification: NotificationTimings::default(),
        }
    }
}

impl ViewerConfig {
    /// Parses an override document. Invalid input falls back to the defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            log::info!("Using default viewer configuration");
            return Self::default();
        };
        match serde_json::from_str::<ViewerConfig>(raw) {
            Ok(config) => {
                log::info!("Viewer configuration loaded from page: {:?}", config.bundler);
                config
            }
            Err(e) => {
                log::warn!("Invalid data-viewer-config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Reads the override from the mount element, if any.
    pub fn from_element(element: Option<&web_sys::Element>) -> Self {
        let raw = element.and_then(|el| el.get_attribute("data-viewer-config"));
        Self::from_json_or_default(raw.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config: Result<ViewerConfig, _> = serde_json::from_str("{}");
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.bundler, BundlerSource::Cdn);
        assert_eq!(config.package_name, "bifrost-export.zip");
    }

    #[test]
    fn test_missing_override_uses_builtin_defaults() {
        let config = ViewerConfig::from_json_or_default(None);
        assert_eq!(config.library_url, DEFAULT_LIBRARY_URL);
        assert_eq!(config.library_global, "JSZip");
        assert_eq!(config.notification, NotificationTimings::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ViewerConfig::from_json_or_default(Some(
            r#"{"bundler": "builtin", "package_name": "site.zip", "notification": {"hide_after_ms": 5000}}"#,
        ));
        assert_eq!(config.bundler, BundlerSource::Builtin);
        assert_eq!(config.package_name, "site.zip");
        assert_eq!(config.library_global, "JSZip");
        assert_eq!(config.notification.hide_after_ms, 5000);
        assert_eq!(config.notification.exit_ms, 300);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(
            ViewerConfig::from_json_or_default(Some("{not json")),
            ViewerConfig::default()
        );
        assert_eq!(
            ViewerConfig::from_json_or_default(Some(r#"{"bundler": "ftp"}"#)),
            ViewerConfig::default()
        );
        assert_eq!(ViewerConfig::from_json_or_default(Some("  ")), ViewerConfig::default());
        assert_eq!(ViewerConfig::from_json_or_default(None), ViewerConfig::default());
    }
}
