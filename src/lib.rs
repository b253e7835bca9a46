//! prodsearch: search a remote product catalog by category and page through the results.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::commands::search;
use app::{AppContext, SearchController};
use ports::NoopImageProbe;
use services::HttpProductApi;

pub use app::commands::search::SearchPage;
pub use app::{SearchView, render};
pub use domain::configuration::{API_URL_ENV, DEFAULT_CONFIG_FILE, load_config};
pub use domain::{
    AppError, Category, ImageFallback, PAGE_SIZE, PageNav, Product, ProductId, SearchConfig,
    SearchError, SearchState, SearchStatus,
};
pub use ports::{ImageProbe, ProductApi};

/// Categories accepted by [`search_page`], in suggestion order.
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Search `category` against the configured catalog and return page `page`.
///
/// The page is clamped into the available range. Configuration is loaded the same
/// way as the CLI: `config_path`, else `./prodsearch.toml`, else defaults.
pub fn search_page(
    config_path: Option<&Path>,
    category: &str,
    page: usize,
) -> Result<SearchPage, AppError> {
    let config = load_config(config_path)?;
    search_page_with(&config, category, page)
}

/// Same as [`search_page`] with an already loaded configuration.
pub fn search_page_with(
    config: &SearchConfig,
    category: &str,
    page: usize,
) -> Result<SearchPage, AppError> {
    let api = HttpProductApi::new(&config.api)?;
    let ctx = AppContext::new(
        api,
        NoopImageProbe,
        ImageFallback::new(config.display.fallback_image.clone()),
    );
    let controller = search::execute(&ctx, category, page)?;
    Ok(SearchPage::from_controller(&controller))
}

/// Create a controller backed by the configured HTTP catalog.
pub fn controller(config: &SearchConfig) -> Result<SearchController<HttpProductApi>, AppError> {
    Ok(SearchController::new(HttpProductApi::new(&config.api)?))
}
