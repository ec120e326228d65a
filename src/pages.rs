use anyhow::Context;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Positive,
    Negative,
}

/// The three static pages, read once at startup. No dynamic context is ever
/// rendered into them.
#[derive(Debug, Clone)]
pub struct PageStore {
    index: String,
    positive: String,
    negative: String,
}

impl PageStore {
    pub fn new(index: String, positive: String, negative: String) -> Self {
        PageStore {
            index,
            positive,
            negative,
        }
    }

    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        Ok(PageStore::new(
            read_page(dir, "index.html")?,
            read_page(dir, "positive.html")?,
            read_page(dir, "negative.html")?,
        ))
    }

    pub fn get(&self, page: Page) -> &str {
        match page {
            Page::Index => &self.index,
            Page::Positive => &self.positive,
            Page::Negative => &self.negative,
        }
    }
}

fn read_page(dir: &Path, name: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read page {}", path.display()))
}
