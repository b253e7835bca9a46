pub mod loader;
pub mod search_config;

pub use loader::{API_URL_ENV, DEFAULT_CONFIG_FILE, load_config, parse_config_content};
pub use search_config::{DisplayConfig, ProductApiConfig, SearchConfig};
