//! Session journal of announced decrees.
//!
//! In-memory only: the log lives and dies with the session. Export produces
//! text or markdown strings for display or copy-out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decree::Decree;

/// One announced decree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecreeRecord {
    /// Rule title.
    pub title: String,
    /// Rule description.
    pub description: String,
    /// Rotation direction, rendered as its display form.
    pub direction: String,
    /// When the decree was announced.
    pub announced_at: DateTime<Utc>,
}

impl DecreeRecord {
    /// Build a record from a decree at the given time.
    pub fn from_decree(decree: &Decree, announced_at: DateTime<Utc>) -> Self {
        Self {
            title: decree.rule.title.clone(),
            description: decree.rule.description.clone(),
            direction: decree.direction.to_string(),
            announced_at,
        }
    }
}

/// A chronological log of the session's decrees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecreeLog {
    records: Vec<DecreeRecord>,
}

impl DecreeLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn append(&mut self, record: DecreeRecord) {
        self.records.push(record);
    }

    /// All records in announcement order.
    pub fn records(&self) -> &[DecreeRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Decree Log\n==========\n\n");
        for record in &self.records {
            out.push_str(&format!(
                "[{}] {} — {}\n  {}\n\n",
                record.announced_at.format("%H:%M"),
                record.title,
                record.direction,
                record.description,
            ));
        }
        out
    }

    /// Export as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Decree Log\n\n");
        for record in &self.records {
            out.push_str(&format!(
                "## {}\n\n*{}* at {}\n\n> {}\n\n",
                record.title,
                record.direction,
                record.announced_at.format("%H:%M"),
                record.description,
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::{RotationDirection, Rule};

    fn sample_record() -> DecreeRecord {
        let decree = Decree {
            direction: RotationDirection::CounterClockwise,
            rule: Rule::new("The Blink Test", "The first person to blink starts."),
        };
        DecreeRecord::from_decree(&decree, Utc::now())
    }

    #[test]
    fn empty_log() {
        let log = DecreeLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn append_and_query() {
        let mut log = DecreeLog::new();
        log.append(sample_record());
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].title, "The Blink Test");
        assert_eq!(log.records()[0].direction, "Counter-Clockwise");
    }

    #[test]
    fn export_text_contains_record() {
        let mut log = DecreeLog::new();
        log.append(sample_record());
        let txt = log.export_text();
        assert!(txt.contains("Decree Log"));
        assert!(txt.contains("The Blink Test — Counter-Clockwise"));
        assert!(txt.contains("The first person to blink starts."));
    }

    #[test]
    fn export_markdown_contains_record() {
        let mut log = DecreeLog::new();
        log.append(sample_record());
        let md = log.export_markdown();
        assert!(md.contains("# Decree Log"));
        assert!(md.contains("## The Blink Test"));
        assert!(md.contains("*Counter-Clockwise*"));
    }

    #[test]
    fn serde_roundtrip() {
        let mut log = DecreeLog::new();
        log.append(sample_record());
        let json = serde_json::to_string(&log).unwrap();
        let back: DecreeLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
    }
}
