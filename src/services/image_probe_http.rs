//! Image probe implementation using HEAD requests.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::ImageProbe;

/// Checks image availability with a `HEAD` request.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: Client,
}

impl HttpImageProbe {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl ImageProbe for HttpImageProbe {
    fn loads(&self, src: &str) -> bool {
        let Ok(url) = Url::parse(src) else {
            tracing::debug!(src, "image source is not an absolute URL");
            return false;
        };
        match self.client.head(url).send() {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::debug!(src, status = response.status().as_u16(), "image failed to load");
                false
            }
            Err(e) => {
                tracing::debug!(src, error = %e, "image failed to load");
                false
            }
        }
    }
}
