//! Catalog product model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier. The catalog emits numeric ids, but string ids are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog item as returned by the product API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Price formatted with a dollar sign and two decimals.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Category with the first letter of each word upper-cased.
    pub fn display_category(&self) -> String {
        self.category
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}
