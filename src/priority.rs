use regex::Regex;
use std::{
    collections::HashMap,
    sync::LazyLock
};

pub const UNLISTED_PRIORITY: u32 = 99;

// Categories whose pages are crawled, and ranked, ahead of everything else.
const FAVORED: [&str; 2] = ["math.QA", "math.RT"];

#[allow(clippy::expect_used)]
static SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/list/([^/]+)/new").expect("source category regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPriority {
    ranks: HashMap<String, u32>
}

impl CategoryPriority {
    pub fn new() -> Self {
        let ranks = FAVORED.iter()
            .enumerate()
            .map(|(rank, cat)| (cat.to_string(), rank as u32))
            .collect();
        CategoryPriority {
            ranks
        }
    }

    pub fn get(&self, category: &str) -> u32 {
        self.ranks.get(category).copied().unwrap_or(UNLISTED_PRIORITY)
    }

    /// Stable-sort the requested categories so favored ones come first and the
    /// rest keep the order they were supplied in.
    pub fn order_requested(&self, categories: &[String]) -> Vec<String> {
        let mut ordered = categories.to_vec();
        ordered.sort_by_key(|cat| self.get(cat));
        ordered
    }
}

impl Default for CategoryPriority {
    fn default() -> Self {
        Self::new()
    }
}

/// Category token of a listing page URL, e.g. `math.RT` for
/// `https://arxiv.org/list/math.RT/new`. Empty when the URL is not a listing.
pub fn source_category(url: &str) -> String {
    SOURCE_RE.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
