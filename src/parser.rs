use scraper::Html;
use std::vec::IntoIter;
use tracing::debug;
use url::Url;

use crate::{
    dedup::SeenIds,
    extract::PaperExtractor,
    model::PaperRecord,
    priority::{source_category, CategoryPriority},
    rank::rank,
    sections::classify_blocks
};

/// Run context for parsing listing pages.
///
/// Holds the category priorities and the identifiers already emitted during
/// the run. Pages must be fed one at a time in crawl order: whichever page
/// mentions a paper first keeps it.
#[derive(Debug, Default)]
pub struct ListingParser {
    priority: CategoryPriority,
    seen: SeenIds
}

impl ListingParser {
    pub fn new(priority: CategoryPriority) -> Self {
        Self::with_seen(priority, SeenIds::new())
    }

    pub fn with_seen(priority: CategoryPriority, seen: SeenIds) -> Self {
        ListingParser {
            priority,
            seen
        }
    }

    pub fn priority(&self) -> &CategoryPriority {
        &self.priority
    }

    pub fn seen(&self) -> &SeenIds {
        &self.seen
    }

    pub fn parse_page(&mut self, html: &str, page_url: &Url) -> Listing {
        let source = source_category(page_url.as_str());
        let cat_priority = self.priority.get(&source);

        let document = Html::parse_document(html);
        let blocks = classify_blocks(&document);
        let mut extractor = PaperExtractor::new(&mut self.seen, page_url, &source, cat_priority);
        let candidates = blocks.iter()
            .flat_map(|block| extractor.extract_block(block))
            .collect::<Vec<_>>();

        debug!(
            source = %source,
            blocks = blocks.len(),
            papers = candidates.len(),
            "parsed listing page"
        );
        Listing {
            source_category: source,
            records: rank(candidates)
        }
    }
}

// Final, ordered records of one listing page. Consumed once.
#[derive(Debug)]
pub struct Listing {
    source_category: String,
    records: IntoIter<PaperRecord>
}

impl Listing {
    pub fn source_category(&self) -> &str {
        &self.source_category
    }
}

impl Iterator for Listing {
    type Item = PaperRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for Listing {}
