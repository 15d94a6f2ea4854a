//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use chrono::Local;
use packtally_core::ZeroStoredPolicy;
use packtally_core::render::render_report;
use packtally_core::stats_for_archive;

pub fn execute(args: &StatsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let policy = if args.fail_on_zero_stored {
        ZeroStoredPolicy::Fail
    } else {
        ZeroStoredPolicy::SkipFactor
    };

    let stats = add_archive_context(stats_for_archive(&args.archive, policy), &args.archive)?;

    let name = args
        .archive
        .file_stem()
        .map_or_else(|| "archive".to_string(), |s| s.to_string_lossy().into_owned());
    let text = render_report(&stats.stats, &stats.totals, &stats.entries, &name, Local::now());

    formatter.format_stats_result(&stats, &text)
}
