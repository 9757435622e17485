use chrono::{DateTime, Utc};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path
};

use crate::{
    format::Formatter,
    model::PaperRecord
};

// Utils to store a run's feed on the local device.
pub struct LocalSaver;

impl LocalSaver {
    pub fn save_as_jsonl(fname: &Path, data: &[PaperRecord]) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(fname)?);
        data.iter().try_for_each(|result| -> io::Result<()> {
            file.write_all(Formatter::to_jsonl(result)?.as_bytes())?;
            Ok(())
        })?;
        file.flush()?;
        Ok(())
    }

    pub fn save_as_readme(fname: &Path, date: DateTime<Utc>, data: &[PaperRecord]) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(fname)?);
        file.write_all(Formatter::readme_header(date).as_bytes())?;
        data.iter().try_for_each(|result| -> io::Result<()> {
            file.write_all(Formatter::to_readme(result).as_bytes())?;
            Ok(())
        })?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn records() -> Vec<PaperRecord> {
        ["2406.00002", "2406.00001"].iter()
            .map(|id| PaperRecord {
                id: id.to_string(),
                abs: format!("https://arxiv.org/abs/{}", id),
                pdf: format!("https://arxiv.org/pdf/{}", id),
                categories: vec![String::from("cs.CV")],
            })
            .collect()
    }

    #[test]
    fn test_save_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.jsonl");
        LocalSaver::save_as_jsonl(&path, &records()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let parsed = written.lines()
            .map(|line| serde_json::from_str::<PaperRecord>(line).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(parsed, records());
    }

    #[test]
    fn test_save_readme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.md");
        LocalSaver::save_as_readme(&path, Utc::now(), &records()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# arXiv new submissions, "));
        let first = written.find("2406.00002").unwrap();
        let second = written.find("2406.00001").unwrap();
        assert!(first < second);
    }
}
