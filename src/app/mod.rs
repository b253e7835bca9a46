pub mod cli;
pub mod commands;
mod context;
pub mod render;
mod search_controller;

pub use context::AppContext;
pub use search_controller::{SearchController, SearchView};
