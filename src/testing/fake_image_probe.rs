use crate::ports::ImageProbe;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct FakeImageProbe {
    pub broken: HashSet<String>,
}

impl FakeImageProbe {
    pub fn with_broken<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { broken: sources.into_iter().map(Into::into).collect() }
    }
}

impl ImageProbe for FakeImageProbe {
    fn loads(&self, src: &str) -> bool {
        !self.broken.contains(src)
    }
}
