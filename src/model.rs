use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Listing pages group entries under headings. The discriminant is the sort rank.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    New = 0,
    Cross = 1,
    Replacement = 2,
    #[default]
    Other = 3,
}

impl SectionKind {
    /// Classify a heading by its full visible text, case-insensitively.
    pub fn classify(heading: &str) -> Self {
        let heading = heading.to_lowercase();
        if heading.contains("new submission") {
            SectionKind::New
        } else if heading.contains("cross submission") || heading.contains("cross-list") {
            SectionKind::Cross
        } else if heading.contains("replacement") {
            SectionKind::Replacement
        } else {
            SectionKind::Other
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

// The unit handed to downstream sinks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaperRecord {
    pub id: String,
    pub abs: String,
    pub pdf: String,
    pub categories: Vec<String>,
}

impl PaperRecord {
    pub fn new(id: String, abs: String, pdf: String, categories: BTreeSet<String>) -> Self {
        PaperRecord {
            id,
            abs,
            pdf,
            categories: categories.into_iter().collect(),
        }
    }
}

// A record still carrying its page-local sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPaper {
    pub record: PaperRecord,
    pub cat_priority: u32,
    pub section: SectionKind,
}

impl RankedPaper {
    pub fn new(record: PaperRecord, cat_priority: u32, section: SectionKind) -> Self {
        RankedPaper {
            record,
            cat_priority,
            section,
        }
    }

    pub fn into_record(self) -> PaperRecord {
        self.record
    }
}
