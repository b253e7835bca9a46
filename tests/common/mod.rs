//! Shared testing utilities for prodsearch integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const API_PATH: &str = "/api/fetch-products";

/// Isolated work directory plus a mock catalog the CLI is configured to call.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    server: ServerGuard,
}

impl TestContext {
    /// Create a new environment with `prodsearch.toml` pointing at the mock catalog.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let server = Server::new();
        let ctx = Self { root, work_dir, server };
        ctx.write_config(&format!(
            "[api]\napi_url = \"{}\"\ntimeout_secs = 2\n\n[display]\nfallback_image = \"/img/fallback.jpg\"\n",
            ctx.api_url()
        ));
        ctx
    }

    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.url(), API_PATH)
    }

    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("prodsearch.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write prodsearch.toml");
    }

    /// Build a command for invoking the compiled `prodsearch` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prodsearch").expect("Failed to locate prodsearch binary");
        cmd.current_dir(&self.work_dir).env_remove("PRODSEARCH_API_URL");
        cmd
    }

    /// Mock a catalog answer with `count` products for `category`.
    pub fn mock_products(&mut self, category: &str, count: usize) -> Mock {
        let body = products_json(count, &self.server_url());
        self.server
            .mock("POST", API_PATH)
            .match_body(mockito::Matcher::Json(serde_json::json!({ "category": category })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}

/// JSON array of `count` products whose images live under `image_base`.
pub fn products_json(count: usize, image_base: &str) -> String {
    let products: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": format!("Product {i}"),
                "category": "smartphones",
                "price": 100.0 + i as f64,
                "image": format!("{image_base}/images/{i}.jpg"),
            })
        })
        .collect();
    serde_json::Value::Array(products).to_string()
}
