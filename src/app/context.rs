use crate::domain::ImageFallback;
use crate::ports::{ImageProbe, ProductApi};

/// Application context holding dependencies for command execution.
pub struct AppContext<A: ProductApi, P: ImageProbe> {
    api: A,
    probe: P,
    images: ImageFallback,
}

impl<A: ProductApi, P: ImageProbe> AppContext<A, P> {
    /// Create a new application context.
    pub fn new(api: A, probe: P, images: ImageFallback) -> Self {
        Self { api, probe, images }
    }

    /// Get a reference to the product API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Get a reference to the image probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Get a reference to the image fallback handler.
    pub fn images(&self) -> &ImageFallback {
        &self.images
    }
}
