use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::model::SectionKind;

// Headings and entry lists alternate directly under the listing container.
#[allow(clippy::expect_used)]
static BLOCK_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div#dlpage > h3, div#dlpage > dl").expect("block selector is valid")
});

/// Running section context while walking a listing page.
///
/// Starts in `Other` so lists that appear before any heading still get a rank.
/// Only headings move the state; list blocks read it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    current: SectionKind
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_heading(&mut self, text: &str) -> SectionKind {
        self.current = SectionKind::classify(text);
        self.current
    }

    pub fn current(&self) -> SectionKind {
        self.current
    }
}

// One entry list together with the section it was found under.
#[derive(Debug, Clone)]
pub struct SectionBlock<'a> {
    pub section: SectionKind,
    pub list: ElementRef<'a>,
}

pub fn classify_blocks(document: &Html) -> Vec<SectionBlock<'_>> {
    let mut tracker = SectionTracker::new();
    let mut blocks = Vec::new();
    for element in document.select(&BLOCK_SEL) {
        match element.value().name() {
            "h3" => {
                let heading = element.text().collect::<String>();
                tracker.observe_heading(heading.trim());
            }
            "dl" => blocks.push(SectionBlock {
                section: tracker.current(),
                list: element,
            }),
            _ => {}
        }
    }
    blocks
}
