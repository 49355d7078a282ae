use owo_colors::OwoColorize;
use scorecard_runtime::Comparison;
use scorecard_types::CollegeRecord;
use serde::Serialize;
use std::fmt;

use super::options::DisplayOptions;

pub struct ComparisonView<'a> {
    pub comparison: &'a Comparison,
    pub options: &'a DisplayOptions,
}

impl fmt::Display for ComparisonView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.comparison.records {
            let mut line = record.name.clone();
            if let Some(location) = record.location() {
                line.push_str(&format!(" ({})", location));
            }
            if let Some(ownership) = record.ownership_label() {
                line.push_str(&format!(" - {}", ownership));
            }
            if self.options.enable_color {
                writeln!(f, "{}", line.bold())?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.comparison.report.trim_end())?;

        for (name, reason) in &self.comparison.skipped {
            let note = format!("Skipped {}: {}", name, reason);
            if self.options.enable_color {
                write!(f, "\n{}", note.yellow())?;
            } else {
                write!(f, "\n{}", note)?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct ComparisonJson<'a> {
    pub records: &'a [CollegeRecord],
    pub report: &'a str,
    pub skipped: Vec<SkippedJson<'a>>,
}

#[derive(Serialize)]
pub struct SkippedJson<'a> {
    pub name: &'a str,
    pub reason: &'a str,
}

impl<'a> From<&'a Comparison> for ComparisonJson<'a> {
    fn from(comparison: &'a Comparison) -> Self {
        Self {
            records: &comparison.records,
            report: &comparison.report,
            skipped: comparison
                .skipped
                .iter()
                .map(|(name, reason)| SkippedJson { name, reason })
                .collect(),
        }
    }
}
