//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use packtally_core::ArchiveStats;
use packtally_core::RunSummary;
use packtally_core::render::format_size;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, summary: &RunSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive created: {}",
                style("✓").green().bold(),
                summary.archive_path.display()
            ));
        } else {
            let _ = self.term.write_line(&format!(
                "Archive created: {}",
                summary.archive_path.display()
            ));
        }

        let _ = self
            .term
            .write_line(&format!("  Entries:      {}", summary.entry_count));
        let _ = self.term.write_line(&format!(
            "  Compression:  {} --> {} (factor: {})",
            format_size(summary.totals.original_bytes),
            format_size(summary.totals.stored_bytes),
            summary.totals.factor
        ));
        let _ = self.term.write_line(&format!(
            "  Log written:  {}",
            summary.report_path.display()
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Percent:      {}", summary.totals.percent));
        }

        Ok(())
    }

    fn format_stats_result(&self, _stats: &ArchiveStats, report_text: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        // The report is already a formatted table; print it as-is.
        let _ = self.term.write_line(report_text.trim_end());
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
