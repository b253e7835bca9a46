//! Search configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::AppError;

use super::SearchConfig;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "prodsearch.toml";

/// Environment variable overriding `api.api_url`.
pub const API_URL_ENV: &str = "PRODSEARCH_API_URL";

/// Load configuration from `path`, or from `./prodsearch.toml` when present, or defaults.
///
/// An explicit path must exist. `PRODSEARCH_API_URL` is applied last.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            parse_config_content(&fs::read_to_string(path)?)?
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                parse_config_content(&fs::read_to_string(&default_path)?)?
            } else {
                SearchConfig::default()
            }
        }
    };

    if let Ok(raw) = std::env::var(API_URL_ENV) {
        config.api.api_url = Url::parse(raw.trim()).map_err(|e| {
            AppError::config_error(format!("{API_URL_ENV} is not a valid URL: {e}"))
        })?;
        tracing::debug!(api_url = %config.api.api_url, "api_url overridden from environment");
    }

    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SearchConfig, AppError> {
    let config: SearchConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn search_config_parses_from_toml() {
        let toml = r#"
[api]
api_url = "http://localhost:8080/products"
timeout_secs = 5

[display]
fallback_image = "https://cdn.example.com/missing.png"
"#;
        let config = parse_config_content(toml).unwrap();
        assert_eq!(config.api.api_url.as_str(), "http://localhost:8080/products");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.display.fallback_image, "https://cdn.example.com/missing.png");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = parse_config_content("[api]\ntimeout_secs = 2\n").unwrap();
        assert_eq!(config.api.timeout_secs, 2);
        assert_eq!(config.display.fallback_image, "/path/to/fallback-image.jpg");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config_content("[api]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = parse_config_content("[api]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    #[serial]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/prodsearch.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigMissing(_)));
    }

    #[test]
    #[serial]
    fn environment_overrides_api_url() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\napi_url = \"http://localhost:1/a\"").unwrap();

        unsafe {
            std::env::set_var(API_URL_ENV, "http://localhost:2/b");
        }
        let result = load_config(Some(file.path()));
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }

        assert_eq!(result.unwrap().api.api_url.as_str(), "http://localhost:2/b");
    }

    #[test]
    #[serial]
    fn invalid_environment_url_is_rejected() {
        unsafe {
            std::env::set_var(API_URL_ENV, "not a url");
        }
        let result = load_config(None);
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
