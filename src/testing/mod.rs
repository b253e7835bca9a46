mod fake_image_probe;
mod fake_product_api;

pub use fake_image_probe::FakeImageProbe;
pub use fake_product_api::{FakeProductApi, sample_products};
