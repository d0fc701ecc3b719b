//! 运行时配置
//!
//! 后端地址的来源优先级：LocalStorage 覆盖值 → 编译期 `STUDERE_API_URL` → 默认地址。

use studere_shared::DEFAULT_API_BASE_URL;
use thiserror::Error;
use tracing::{info, warn};

use crate::web::LocalStorage;

/// LocalStorage 中覆盖后端地址的键
pub const API_URL_STORAGE_KEY: &str = "studere_api_url";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    Empty,
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// 在浏览器中加载配置
    pub fn load() -> Self {
        Self::resolve(
            LocalStorage::get(API_URL_STORAGE_KEY),
            option_env!("STUDERE_API_URL"),
        )
    }

    fn resolve(stored: Option<String>, build_time: Option<&str>) -> Self {
        let sources = [
            ("local storage", stored),
            ("build environment", build_time.map(str::to_string)),
        ];

        for (source, value) in sources {
            let Some(raw) = value else { continue };
            match normalize_base_url(&raw) {
                Ok(api_base_url) => {
                    info!(source, url = %api_base_url, "api base url configured");
                    return Self { api_base_url };
                }
                Err(e) => warn!(source, error = %e, "ignoring api base url"),
            }
        }

        let config = Self::default();
        info!(url = %config.api_base_url, "using default api base url");
        config
    }
}

/// 去掉首尾空白与末尾的 `/`，并要求 http(s) 协议
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::Empty);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidScheme(url.to_string()));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://api.example.com// "),
            Ok("https://api.example.com".to_string())
        );
        assert_eq!(normalize_base_url("  "), Err(ConfigError::Empty));
        assert!(matches!(
            normalize_base_url("ftp://x"),
            Err(ConfigError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_storage_override_wins() {
        let config = AppConfig::resolve(
            Some("http://override:9000/".into()),
            Some("http://build:8000"),
        );
        assert_eq!(config.api_base_url, "http://override:9000");
    }

    #[test]
    fn test_invalid_values_fall_through() {
        let config = AppConfig::resolve(Some("nonsense".into()), Some("http://build:8000"));
        assert_eq!(config.api_base_url, "http://build:8000");

        let config = AppConfig::resolve(None, Some(""));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
