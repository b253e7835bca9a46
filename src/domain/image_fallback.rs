/// Picks the image source to display for a product card.
///
/// Holds no per-item state: the caller reports whether loading the original
/// source failed and gets back the source to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    fallback: String,
}

impl ImageFallback {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self { fallback: fallback.into() }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Source to show before any load attempt. Blank sources fall back immediately.
    pub fn initial<'a>(&'a self, src: &'a str) -> &'a str {
        if src.trim().is_empty() { &self.fallback } else { src }
    }

    /// Source to show once a load of `src` has completed.
    pub fn resolve<'a>(&'a self, src: &'a str, load_failed: bool) -> &'a str {
        if load_failed { &self.fallback } else { self.initial(src) }
    }
}
