use std::{
    cmp::Ordering,
    vec::IntoIter
};

use crate::model::{PaperRecord, RankedPaper};

// Category priority ascending, then section ascending, then newest id first.
fn compare(a: &RankedPaper, b: &RankedPaper) -> Ordering {
    a.cat_priority.cmp(&b.cat_priority)
        .then(a.section.cmp(&b.section))
        .then_with(|| b.record.id.cmp(&a.record.id))
}

/// Orders one page's candidates and strips their sort keys.
pub fn rank(mut candidates: Vec<RankedPaper>) -> IntoIter<PaperRecord> {
    candidates.sort_by(compare);
    candidates.into_iter()
        .map(RankedPaper::into_record)
        .collect::<Vec<_>>()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;
    use crate::model::SectionKind;

    fn candidate(id: &str, cat_priority: u32, section: SectionKind) -> RankedPaper {
        let abs = format!("https://arxiv.org/abs/{}", id);
        let pdf = format!("https://arxiv.org/pdf/{}", id);
        let record = PaperRecord::new(id.to_string(), abs, pdf, BTreeSet::new());
        RankedPaper::new(record, cat_priority, section)
    }

    fn ids(records: impl Iterator<Item = PaperRecord>) -> Vec<String> {
        records.map(|r| r.id).collect()
    }

    #[test]
    fn test_id_descending_within_section() {
        let ranked = rank(vec![
            candidate("2406.00001", 0, SectionKind::New),
            candidate("2406.00300", 0, SectionKind::New),
            candidate("2406.00020", 0, SectionKind::New),
        ]);
        assert_eq!(ids(ranked), vec!["2406.00300", "2406.00020", "2406.00001"]);
    }

    #[test]
    fn test_section_before_id() {
        let ranked = rank(vec![
            candidate("2406.00900", 0, SectionKind::Replacement),
            candidate("2406.00001", 0, SectionKind::New),
            candidate("2406.00500", 0, SectionKind::Other),
            candidate("2406.00002", 0, SectionKind::Cross),
        ]);
        assert_eq!(ids(ranked), vec!["2406.00001", "2406.00002", "2406.00900", "2406.00500"]);
    }

    #[test]
    fn test_priority_dominates() {
        let ranked = rank(vec![
            candidate("2406.00009", 99, SectionKind::New),
            candidate("2406.00001", 1, SectionKind::Replacement),
            candidate("2406.00002", 0, SectionKind::Other),
            candidate("2406.00003", 1, SectionKind::New),
        ]);
        assert_eq!(ids(ranked), vec!["2406.00002", "2406.00003", "2406.00001", "2406.00009"]);
    }

    #[test]
    fn test_pairwise_order_holds() {
        let sections = [SectionKind::New, SectionKind::Cross, SectionKind::Replacement, SectionKind::Other];
        let candidates = (0..40u32)
            .map(|i| {
                let id = format!("2406.{:05}", (i * 7919) % 100_000);
                candidate(&id, [0, 1, 99][(i % 3) as usize], sections[(i % 4) as usize])
            })
            .collect::<Vec<_>>();
        let keys = candidates.iter()
            .map(|c| (c.record.id.clone(), (c.cat_priority, c.section)))
            .collect::<HashMap<_, _>>();

        // same order as sorting by id desc, then section, then priority, each pass stable
        let mut passes = candidates.clone();
        passes.sort_by(|a, b| b.record.id.cmp(&a.record.id));
        passes.sort_by_key(|c| c.section);
        passes.sort_by_key(|c| c.cat_priority);

        let ranked = rank(candidates).collect::<Vec<_>>();
        assert_eq!(ranked.len(), 40);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (a_priority, a_section) = keys[&a.id];
            let (b_priority, b_section) = keys[&b.id];
            assert!(a_priority <= b_priority);
            if a_priority == b_priority {
                assert!(a_section <= b_section);
                if a_section == b_section {
                    assert!(a.id >= b.id);
                }
            }
        }
        let expected = passes.into_iter().map(RankedPaper::into_record).collect::<Vec<_>>();
        assert_eq!(ranked, expected);
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(rank(Vec::new()).count(), 0);
    }
}
