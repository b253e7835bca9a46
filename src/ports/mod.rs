mod image_probe;
mod product_api;

pub use image_probe::{ImageProbe, NoopImageProbe};
pub use product_api::ProductApi;
