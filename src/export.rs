//! Export Module
//! Writes the tracker summary to disk and picks export destinations.

use crate::summary::Summary;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Export file kinds offered by the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    ChartPng,
    SummaryJson,
}

impl ExportKind {
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportKind::ChartPng => "monthly_overview.png",
            ExportKind::SummaryJson => "expense_summary.json",
        }
    }

    fn filter(self) -> (&'static str, &'static [&'static str]) {
        match self {
            ExportKind::ChartPng => ("PNG Image", &["png"]),
            ExportKind::SummaryJson => ("JSON", &["json"]),
        }
    }

    /// Ask the user for a destination. `None` when the dialog is cancelled.
    pub fn pick_destination(self) -> Option<PathBuf> {
        let (label, extensions) = self.filter();
        rfd::FileDialog::new()
            .add_filter(label, extensions)
            .set_file_name(self.default_file_name())
            .save_file()
    }
}

/// Writes the summary snapshot as pretty-printed JSON.
pub struct SummaryExporter;

impl SummaryExporter {
    pub fn export_json(path: &Path, summary: &Summary) -> Result<(), ExportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, summary)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        tracing::info!(path = %path.display(), "summary exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ExpenseInput, TrackerState};
    use crate::summary::SummaryCalculator;

    #[test]
    fn writes_summary_json() {
        let mut state = TrackerState::new();
        state.set_income("3000");
        state.add_expense(ExpenseInput {
            name: "Rent".into(),
            amount: 1200.0,
        });
        let summary =
            SummaryCalculator::summarize(&state.ledger, state.income, state.selected_month);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        SummaryExporter::export_json(&path, &summary).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["income"], 3000.0);
        assert_eq!(value["selected"]["month"], "January");
        assert_eq!(value["selected"]["total_expenses"], 1200.0);
        assert_eq!(value["yearly"]["total_savings"], 34800.0);
        assert_eq!(value["months"].as_array().map(Vec::len), Some(12));
        assert_eq!(value["months"][0]["expenses"][0]["name"], "Rent");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("summary.json");
        let summary = SummaryCalculator::summarize(
            &crate::ledger::Ledger::new(),
            0.0,
            crate::ledger::Month::January,
        );
        let err = SummaryExporter::export_json(&path, &summary);
        assert!(matches!(err, Err(ExportError::Io(_))));
    }

    #[test]
    fn default_file_names_match_kind() {
        assert!(ExportKind::ChartPng.default_file_name().ends_with(".png"));
        assert!(ExportKind::SummaryJson.default_file_name().ends_with(".json"));
    }
}
