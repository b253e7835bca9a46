//! Search controller: validation, fetch and pagination over an owned [`SearchState`].

use crate::domain::{
    Category, PageNav, Product, SearchError, SearchState, SearchStatus, page_slice, total_pages,
};
use crate::ports::ProductApi;

/// Owns the search state and mutates it in response to user actions.
///
/// Every mutation goes through `&mut self`, so at most one fetch is in flight per controller.
pub struct SearchController<A: ProductApi> {
    api: A,
    state: SearchState,
}

/// What the current state renders as.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView<'a> {
    /// Category text as entered.
    pub category: &'a str,
    /// A fetch is outstanding; the search action is disabled.
    pub loading: bool,
    pub error: Option<SearchError>,
    /// `No products found for "<category>"` when a completed search came back empty.
    pub empty_notice: Option<String>,
    /// Products on the current page.
    pub cards: &'a [Product],
    pub pagination: Option<PageNav>,
}

impl<A: ProductApi> SearchController<A> {
    pub fn new(api: A) -> Self {
        Self { api, state: SearchState::default() }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Validate `input` and, when it names a category, fetch its products.
    pub fn search(&mut self, input: &str) -> Result<(), SearchError> {
        self.state.category = input.to_string();

        let category = match Category::parse_input(input) {
            Ok(category) => category,
            Err(SearchError::EmptyCategory) => {
                self.state.results.clear();
                self.state.page = 1;
                self.state.has_searched = false;
                self.state.fail(SearchError::EmptyCategory);
                return Err(SearchError::EmptyCategory);
            }
            Err(err) => {
                // Prior results, page and has_searched stay as they were.
                tracing::debug!(input, "rejected category");
                self.state.fail(err);
                return Err(err);
            }
        };

        self.state.status = SearchStatus::Loading;
        self.state.error = None;
        tracing::debug!(%category, "search started");

        match self.api.fetch_by_category(category) {
            Ok(products) => {
                tracing::info!(%category, count = products.len(), "search succeeded");
                self.state.results = products;
                self.state.page = 1;
                self.state.has_searched = true;
                self.state.status = SearchStatus::Success;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%category, error = %err, "product fetch failed");
                self.state.results.clear();
                self.state.page = 1;
                self.state.has_searched = true;
                self.state.fail(SearchError::FetchFailed);
                Err(SearchError::FetchFailed)
            }
        }
    }

    /// Move to page `page`. Out-of-range pages show nothing.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.page = page;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.state.results.len())
    }

    /// Products on the current page.
    pub fn visible_products(&self) -> &[Product] {
        page_slice(&self.state.results, self.state.page)
    }

    pub fn view(&self) -> SearchView<'_> {
        let state = &self.state;
        let loading = state.is_loading();

        let empty_notice = (!loading && state.has_searched && state.results.is_empty())
            .then(|| format!("No products found for \"{}\"", state.category));
        let cards = if state.has_searched { self.visible_products() } else { &[] };
        let pagination = if state.has_searched {
            PageNav::for_results(state.results.len(), state.page)
        } else {
            None
        };

        SearchView {
            category: &state.category,
            loading,
            error: state.error,
            empty_notice,
            cards,
            pagination,
        }
    }
}
