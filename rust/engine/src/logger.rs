use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::compare::{compare_hands, Outcome};
use crate::hand::Hand;
use crate::rank::{best_evaluation, Category};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Complete record of one hand comparison.
/// Serialized to JSONL format for audit logs and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Unique identifier for this comparison (format: YYYYMMDD-NNNNNN)
    pub record_id: String,
    /// Cards of the left hand
    pub left: Vec<Card>,
    /// Cards of the right hand
    pub right: Vec<Card>,
    /// Best category matched by the left hand
    pub left_category: Category,
    /// Best category matched by the right hand
    pub right_category: Category,
    /// Comparison outcome
    pub outcome: Outcome,
    /// Timestamp when the comparison ran (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl ComparisonRecord {
    /// Evaluates both hands and captures the full comparison in one record.
    pub fn from_comparison(record_id: String, left: &Hand, right: &Hand) -> Self {
        Self {
            record_id,
            left: left.cards().to_vec(),
            right: right.cards().to_vec(),
            left_category: best_evaluation(left).category,
            right_category: best_evaluation(right).category,
            outcome: compare_hands(left, right),
            ts: None,
            meta: None,
        }
    }
}

pub struct ComparisonLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl ComparisonLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_date_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_record_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &ComparisonRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

pub fn format_record_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}
