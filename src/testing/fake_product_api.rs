use crate::domain::{AppError, Category, Product, ProductId};
use crate::ports::ProductApi;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeProductApi {
    pub requested: Arc<Mutex<Vec<Category>>>,
    pub response: Option<Vec<Product>>,
}

impl FakeProductApi {
    pub fn returning(products: Vec<Product>) -> Self {
        Self { requested: Arc::new(Mutex::new(vec![])), response: Some(products) }
    }

    pub fn failing() -> Self {
        Self { requested: Arc::new(Mutex::new(vec![])), response: None }
    }

    pub fn requested_categories(&self) -> Vec<Category> {
        self.requested.lock().unwrap().clone()
    }
}

impl ProductApi for FakeProductApi {
    fn fetch_by_category(&self, category: Category) -> Result<Vec<Product>, AppError> {
        self.requested.lock().unwrap().push(category);
        self.response.clone().ok_or(AppError::HttpStatus { status: 503 })
    }
}

pub fn sample_products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| Product {
            id: ProductId::Number(i as u64),
            title: format!("Product {i}"),
            category: "smartphones".to_string(),
            price: 10.0 * i as f64,
            image: format!("https://cdn.example.com/{i}.jpg"),
        })
        .collect()
}
