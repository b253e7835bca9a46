pub mod category;
pub mod configuration;
pub mod error;
pub mod image_fallback;
pub mod pagination;
pub mod product;
pub mod search_state;

pub use category::Category;
pub use configuration::{DisplayConfig, ProductApiConfig, SearchConfig};
pub use error::{AppError, SearchError};
pub use image_fallback::ImageFallback;
pub use pagination::{PAGE_SIZE, PageNav, page_slice, page_window, total_pages};
pub use product::{Product, ProductId};
pub use search_state::{SearchState, SearchStatus};
