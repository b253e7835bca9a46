//! Image probe port definition.

/// Port for checking whether an image source loads.
pub trait ImageProbe {
    /// Returns `true` when `src` can be loaded.
    fn loads(&self, src: &str) -> bool;
}

impl<T: ImageProbe + ?Sized> ImageProbe for Box<T> {
    fn loads(&self, src: &str) -> bool {
        (**self).loads(src)
    }
}

/// Probe that assumes every image loads, used when verification is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImageProbe;

impl ImageProbe for NoopImageProbe {
    fn loads(&self, _src: &str) -> bool {
        true
    }
}
