//! Interactive browse loop.

use std::path::Path;

use dialoguer::{Input, Select};

use crate::app::SearchController;
use crate::app::commands::browse::{NavAction, nav_actions};
use crate::app::render::{render_view, search_action_label};
use crate::domain::{AppError, Category};

pub fn run_browse(config_path: Option<&Path>, verify_images: bool) -> Result<(), AppError> {
    super::with_context(config_path, verify_images, |ctx| {
        let mut controller = SearchController::new(ctx.api());
        let suggestions =
            Category::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ");

        loop {
            let input: String = Input::new()
                .with_prompt(format!("Search categories ({})", suggestions))
                .allow_empty(true)
                .interact_text()
                .map_err(|err| AppError::Prompt(format!("Failed to read category: {}", err)))?;

            if Category::parse_input(&input).is_ok() {
                println!("{}", search_action_label(true));
            }
            // The outcome is rendered from the controller's state.
            let _ = controller.search(&input);

            loop {
                print!("{}", render_view(&controller.view(), ctx.images(), ctx.probe()));

                let actions = nav_actions(&controller.view());
                let selection = Select::new()
                    .with_prompt("Navigate")
                    .items(&actions)
                    .default(0)
                    .interact_opt()
                    .map_err(|err| AppError::Prompt(format!("Failed to select action: {}", err)))?;

                match selection.map(|index| actions[index]) {
                    Some(NavAction::NewSearch) => break,
                    Some(NavAction::Quit) | None => return Ok(()),
                    Some(action) => {
                        if let Some(page) = action.target_page() {
                            controller.go_to_page(page);
                        }
                    }
                }
            }
        }
    })
}
