use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::SearchError;

/// Product categories the catalog can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Smartphones,
    Laptops,
    Fragrances,
    Skincare,
    Groceries,
    HomeDecoration,
}

impl Category {
    /// All categories in suggestion order.
    pub const ALL: [Category; 6] = [
        Category::Smartphones,
        Category::Laptops,
        Category::Fragrances,
        Category::Skincare,
        Category::Groceries,
        Category::HomeDecoration,
    ];

    /// Name used on the wire and typed by users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Smartphones => "smartphones",
            Category::Laptops => "laptops",
            Category::Fragrances => "fragrances",
            Category::Skincare => "skincare",
            Category::Groceries => "groceries",
            Category::HomeDecoration => "home-decoration",
        }
    }

    /// Exact, case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.as_str() == name)
    }

    /// Validate raw user input.
    ///
    /// Blank input is `EmptyCategory`. Anything else must match a wire name exactly;
    /// surrounding whitespace is not stripped before the match.
    pub fn parse_input(input: &str) -> Result<Category, SearchError> {
        if input.trim().is_empty() {
            return Err(SearchError::EmptyCategory);
        }
        Category::from_name(input).ok_or(SearchError::InvalidCategory)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse_input(s)
    }
}
