//! Search configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `prodsearch.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Product API configuration.
    #[serde(default)]
    pub api: ProductApiConfig,
    /// Result display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

/// Product API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductApiConfig {
    /// Endpoint receiving `POST {"category": ...}`.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProductApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl ProductApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api_url must use http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        Ok(())
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Image shown when a product image is missing or fails to load.
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { fallback_image: default_fallback_image() }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.fallback_image.trim().is_empty() {
            return Err(AppError::config_error("fallback_image must not be empty"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api-driven-app-server.vercel.app/api/fetch-products")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_fallback_image() -> String {
    "/path/to/fallback-image.jpg".to_string()
}
