//! Product API port definition.

use crate::domain::{AppError, Category, Product};

/// Port for catalog lookups.
pub trait ProductApi {
    /// Fetch every product in `category`, in catalog order.
    fn fetch_by_category(&self, category: Category) -> Result<Vec<Product>, AppError>;
}

impl<T: ProductApi + ?Sized> ProductApi for &T {
    fn fetch_by_category(&self, category: Category) -> Result<Vec<Product>, AppError> {
        (**self).fetch_by_category(category)
    }
}
