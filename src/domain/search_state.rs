//! State owned by the search controller.

use super::{Product, SearchError};

/// Lifecycle of the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Everything the search view renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Category text as last entered by the user.
    pub category: String,
    pub results: Vec<Product>,
    /// 1-based page index.
    pub page: usize,
    pub status: SearchStatus,
    /// Present only while `status` is `Error`.
    pub error: Option<SearchError>,
    /// Whether a search has reached the catalog; gates the "no results" notice.
    pub has_searched: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            category: String::new(),
            results: Vec::new(),
            page: 1,
            status: SearchStatus::Idle,
            error: None,
            has_searched: false,
        }
    }
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub(crate) fn fail(&mut self, error: SearchError) {
        self.status = SearchStatus::Error;
        self.error = Some(error);
    }
}
