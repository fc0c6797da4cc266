//! Result Sink — appends finished assessments to a spreadsheet-style
//! store.
//!
//! The shipped implementation writes a local CSV file. Callers treat
//! the sink as fire-and-forget: an append failure is logged and the
//! request still succeeds.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::assessment::scoring::RiskTier;

/// One persisted submission row.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub submitted_at: DateTime<Utc>,
    pub email: String,
    pub average_score: f64,
    pub risk_tier: RiskTier,
    /// The job titles exactly as the user typed them, comma-separated.
    /// Empty for submissions without a matching step.
    pub job_titles_raw: String,
}

impl ResultRow {
    fn to_record(&self) -> [String; 5] {
        [
            self.submitted_at.to_rfc3339(),
            self.email.clone(),
            format!("{:.2}", self.average_score),
            self.risk_tier.to_string(),
            self.job_titles_raw.clone(),
        ]
    }
}

const HEADER: [&str; 5] = ["submitted_at", "email", "average_score", "risk_tier", "job_titles"];

/// Persists assessment rows. Carried in `AppState` as
/// `Arc<dyn ResultSink>` so tests can swap in an in-memory collector.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn append(&self, row: &ResultRow) -> Result<()>;
}

/// Appends rows to a local CSV file, writing the header once when the
/// file is created.
pub struct CsvResultSink {
    path: PathBuf,
}

impl CsvResultSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResultSink for CsvResultSink {
    async fn append(&self, row: &ResultRow) -> Result<()> {
        let path = self.path.clone();
        let record = row.to_record();
        tokio::task::spawn_blocking(move || append_record(&path, &record))
            .await
            .context("CSV append task panicked")?
    }
}

fn append_record(path: &Path, record: &[String; 5]) -> Result<()> {
    let fresh = !path.exists();

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening results file {}", path.display()))?;

    let mut writer = csv::Writer::from_writer(file);
    if fresh {
        writer.write_record(HEADER)?;
    }
    writer.write_record(record)?;
    writer.flush().context("flushing results file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(email: &str, average: f64, tier: RiskTier, titles: &str) -> ResultRow {
        ResultRow {
            submitted_at: DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            email: email.to_string(),
            average_score: average,
            risk_tier: tier,
            job_titles_raw: titles.to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_creates_file_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessments.csv");
        let sink = CsvResultSink::new(&path);

        sink.append(&row("a@example.com", 7.5, RiskTier::High, "python developer"))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "submitted_at,email,average_score,risk_tier,job_titles"
        );
        let data = lines.next().unwrap();
        assert!(data.contains("a@example.com"));
        assert!(data.contains("7.50"));
        assert!(data.contains("HIGH"));
        assert!(data.contains("python developer"));
    }

    #[tokio::test]
    async fn test_append_accumulates_rows_without_repeating_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessments.csv");
        let sink = CsvResultSink::new(&path);

        sink.append(&row("a@example.com", 2.0, RiskTier::Low, ""))
            .await
            .unwrap();
        sink.append(&row("b@example.com", 5.0, RiskTier::Moderate, "analyst"))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert_eq!(contents.matches("submitted_at").count(), 1);
    }

    #[tokio::test]
    async fn test_rows_round_trip_through_csv_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessments.csv");
        let sink = CsvResultSink::new(&path);

        sink.append(&row("c@example.com", 4.0, RiskTier::Moderate, "dev, analyst"))
            .await
            .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[1], "c@example.com");
        assert_eq!(&record[2], "4.00");
        assert_eq!(&record[3], "MODERATE");
        // The raw comma survives because csv quotes the field.
        assert_eq!(&record[4], "dev, analyst");
    }

    #[tokio::test]
    async fn test_append_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("assessments.csv");
        let sink = CsvResultSink::new(&path);

        let result = sink.append(&row("d@example.com", 1.0, RiskTier::Low, "")).await;
        assert!(result.is_err());
    }
}
