mod image_probe_http;
mod product_api_http;

pub use image_probe_http::HttpImageProbe;
pub use product_api_http::HttpProductApi;
