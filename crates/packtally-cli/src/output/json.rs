//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use packtally_core::ArchiveStats;
use packtally_core::RunSummary;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, summary: &RunSummary) -> Result<()> {
        #[derive(Serialize)]
        struct PackOutput<'a> {
            archive_path: String,
            report_path: String,
            entry_count: usize,
            totals: &'a packtally_core::ArchiveTotals,
        }

        let data = PackOutput {
            archive_path: summary.archive_path.display().to_string(),
            report_path: summary.report_path.display().to_string(),
            entry_count: summary.entry_count,
            totals: &summary.totals,
        };

        let output = JsonOutput::success("pack", data);
        Self::output(&output)
    }

    fn format_stats_result(&self, stats: &ArchiveStats, _report_text: &str) -> Result<()> {
        let output = JsonOutput::success("stats", stats);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_envelope_shape() {
        #[derive(Serialize)]
        struct TestData {
            value: usize,
        }

        let output = JsonOutput::success("pack", TestData { value: 3 });
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"operation\":\"pack\""));
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"value\":3"));
    }
}
