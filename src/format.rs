use chrono::{DateTime, Utc};

use crate::model::PaperRecord;

pub struct Formatter;

impl Formatter {
    pub fn to_jsonl(data: &PaperRecord) -> serde_json::Result<String> {
        Ok(format!("{}\n", serde_json::to_string(data)?))
    }

    pub fn readme_header(date: DateTime<Utc>) -> String {
        format!("# arXiv new submissions, {}\n\n", date.format("%Y.%m.%d"))
    }

    pub fn to_readme(data: &PaperRecord) -> String {
        let categories = if data.categories.is_empty() {
            String::from("uncategorized")
        } else {
            data.categories.join(", ")
        };
        format!("### [{}]({})\n_{}_<br/>\n[pdf]({})\n\n",
            data.id, data.abs,
            categories,
            data.pdf
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(categories: &[&str]) -> PaperRecord {
        PaperRecord {
            id: String::from("2406.01234"),
            abs: String::from("https://arxiv.org/abs/2406.01234"),
            pdf: String::from("https://arxiv.org/pdf/2406.01234"),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_jsonl_line() {
        let line = Formatter::to_jsonl(&record(&["math.QA"])).unwrap();
        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        let keys = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys.len(), 4);
        assert!(value.get("cat_priority").is_none());
        assert!(value.get("section_rank").is_none());
        assert_eq!(value["categories"][0], "math.QA");
    }

    #[test]
    fn test_readme() {
        let date = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 1).unwrap();
        assert_eq!(Formatter::readme_header(date), "# arXiv new submissions, 2024.06.03\n\n");
        assert_eq!(
            Formatter::to_readme(&record(&["math.QA", "math.RT"])),
            concat!(
                "### [2406.01234](https://arxiv.org/abs/2406.01234)\n",
                "_math.QA, math.RT_<br/>\n",
                "[pdf](https://arxiv.org/pdf/2406.01234)\n\n"
            ),
            "Readme entry improperly formatted"
        );
        assert!(Formatter::to_readme(&record(&[])).contains("_uncategorized_"));
    }
}
