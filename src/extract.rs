use regex::Regex;
use scraper::{ElementRef, Selector};
use std::{
    collections::BTreeSet,
    sync::LazyLock
};
use tracing::warn;
use url::Url;

use crate::{
    dedup::SeenIds,
    model::{PaperRecord, RankedPaper, SectionKind},
    sections::SectionBlock
};

// Static patterns, safe to panic on.
#[allow(clippy::expect_used)]
static DT_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dt").expect("dt selector is valid"));
#[allow(clippy::expect_used)]
static DD_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dd").expect("dd selector is valid"));
#[allow(clippy::expect_used)]
static ABSTRACT_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[title="Abstract"]"#).expect("abstract selector is valid")
});
#[allow(clippy::expect_used)]
static ABS_HREF_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[href*="/abs/"]"#).expect("abs href selector is valid")
});
#[allow(clippy::expect_used)]
static SUBJECTS_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".list-subjects").expect("subjects selector is valid")
});
#[allow(clippy::expect_used)]
static ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/abs/([0-9]{4}\.[0-9]{5})").expect("id regex is valid")
});
#[allow(clippy::expect_used)]
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([a-z\-]+\.[A-Z]{2})\)").expect("subject code regex is valid")
});

/// Turns the entries of classified list blocks into candidate records.
///
/// Every identifier that passes extraction is recorded in `seen` before the
/// rest of the entry is parsed, so repeats later on the same page, or on any
/// later page of the run, are dropped.
pub struct PaperExtractor<'a> {
    seen: &'a mut SeenIds,
    base_url: &'a Url,
    source_category: &'a str,
    cat_priority: u32
}

impl<'a> PaperExtractor<'a> {
    pub fn new(
        seen: &'a mut SeenIds,
        base_url: &'a Url,
        source_category: &'a str,
        cat_priority: u32
    ) -> Self {
        PaperExtractor {
            seen,
            base_url,
            source_category,
            cat_priority
        }
    }

    pub fn extract_block(&mut self, block: &SectionBlock<'_>) -> Vec<RankedPaper> {
        let terms = block.list.select(&DT_SEL);
        let definitions = block.list.select(&DD_SEL);
        // unmatched trailing dt/dd elements are dropped by zip
        terms.zip(definitions)
            .filter_map(|(dt, dd)| self.extract_entry(dt, dd, block.section))
            .collect()
    }

    fn extract_entry(
        &mut self,
        dt: ElementRef<'_>,
        dd: ElementRef<'_>,
        section: SectionKind
    ) -> Option<RankedPaper> {
        let href = abstract_href(dt)?;
        let abs = self.base_url.join(href).ok()?.to_string();
        let id = paper_id(&abs)?;
        if !self.seen.insert(&id) {
            return None;
        }

        let subjects = subject_text(dd);
        if subjects.is_empty() {
            warn!(id = %id, source = %self.source_category, "could not extract categories for paper");
        }

        let pdf = pdf_url(&abs);
        let record = PaperRecord::new(id, abs, pdf, subject_codes(&subjects));
        Some(RankedPaper::new(record, self.cat_priority, section))
    }
}

// Prefer the explicitly labelled abstract link, fall back to any /abs/ link.
// An empty href counts as no link.
pub fn abstract_href<'a>(dt: ElementRef<'a>) -> Option<&'a str> {
    first_href(dt, &ABSTRACT_SEL).or_else(|| first_href(dt, &ABS_HREF_SEL))
}

fn first_href<'a>(dt: ElementRef<'a>, selector: &Selector) -> Option<&'a str> {
    dt.select(selector)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| !href.trim().is_empty())
}

/// Bare `NNNN.NNNNN` identifier of an abstract URL, without version suffix.
pub fn paper_id(abs_url: &str) -> Option<String> {
    ID_RE.captures(abs_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn pdf_url(abs_url: &str) -> String {
    abs_url.replacen("/abs/", "/pdf/", 1)
}

pub fn subject_text(dd: ElementRef<'_>) -> String {
    dd.select(&SUBJECTS_SEL)
        .flat_map(|el| el.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn subject_codes(subjects: &str) -> BTreeSet<String> {
    CODE_RE.captures_iter(subjects)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
