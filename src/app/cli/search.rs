//! Search command implementation.

use std::path::Path;

use crate::app::commands::search::{self, SearchPage};
use crate::app::render::render_view;
use crate::domain::AppError;

pub fn run_search(
    config_path: Option<&Path>,
    category: &str,
    page: usize,
    verify_images: bool,
    json: bool,
) -> Result<(), AppError> {
    super::with_context(config_path, verify_images, |ctx| {
        let controller = search::execute(ctx, category, page)?;

        if json {
            let page = SearchPage::from_controller(&controller);
            let output = serde_json::to_string_pretty(&page).map_err(|e| AppError::ParseError {
                what: "search page".into(),
                details: e.to_string(),
            })?;
            println!("{}", output);
        } else {
            let state = controller.state();
            println!(
                "✅ {} product(s) in '{}' (page {} of {})",
                state.results.len(),
                state.category,
                state.page,
                controller.total_pages().max(1)
            );
            print!("{}", render_view(&controller.view(), ctx.images(), ctx.probe()));
        }
        Ok(())
    })
}
