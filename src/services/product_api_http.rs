//! Product API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::domain::{AppError, Category, Product, ProductApiConfig};
use crate::ports::ProductApi;

/// HTTP client for the product catalog.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    api_url: Url,
    client: Client,
}

impl HttpProductApi {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: &ProductApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    category: &'a str,
}

impl ProductApi for HttpProductApi {
    fn fetch_by_category(&self, category: Category) -> Result<Vec<Product>, AppError> {
        let request = ApiRequest { category: category.as_str() };
        tracing::debug!(url = %self.api_url, category = request.category, "fetching products");

        let response = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus { status: status.as_u16() });
        }

        let products: Vec<Product> = response.json().map_err(|e| AppError::ParseError {
            what: "product list".into(),
            details: e.to_string(),
        })?;

        if let Some(bad) = products.iter().find(|p| !p.has_valid_price()) {
            return Err(AppError::ParseError {
                what: "product list".into(),
                details: format!("product {} has invalid price {}", bad.id, bad.price),
            });
        }

        tracing::debug!(count = products.len(), "products received");
        Ok(products)
    }
}
