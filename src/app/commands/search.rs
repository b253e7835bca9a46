//! One-shot search command.

use serde::Serialize;

use crate::app::{AppContext, SearchController};
use crate::domain::{AppError, PAGE_SIZE, Product};
use crate::ports::{ImageProbe, ProductApi};

/// One page of a completed search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub category: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
    pub products: Vec<Product>,
}

/// Search `category` and move to `page`, clamped into the available pages.
///
/// The returned controller holds the full state for rendering.
pub fn execute<'c, A: ProductApi, P: ImageProbe>(
    ctx: &'c AppContext<A, P>,
    category: &str,
    page: usize,
) -> Result<SearchController<&'c A>, AppError> {
    let mut controller = SearchController::new(ctx.api());
    controller.search(category)?;

    let total = controller.total_pages();
    let target = page.clamp(1, total.max(1));
    if target != page {
        tracing::info!(requested = page, shown = target, "page clamped to available range");
    }
    controller.go_to_page(target);
    Ok(controller)
}

impl SearchPage {
    pub fn from_controller<A: ProductApi>(controller: &SearchController<A>) -> Self {
        let state = controller.state();
        Self {
            category: state.category.clone(),
            page: state.page,
            total_pages: controller.total_pages(),
            total_items: state.results.len(),
            per_page: PAGE_SIZE,
            products: controller.visible_products().to_vec(),
        }
    }
}
