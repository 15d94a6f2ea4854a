//! Pack command implementation.

use crate::cli::PackArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use packtally_core::ArchiveConfig;
use packtally_core::ZeroStoredPolicy;
use packtally_core::archive_source;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut config = ArchiveConfig::default().with_archive_root(&args.archive_root);
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }
    if args.fail_on_zero_stored {
        config = config.with_zero_stored(ZeroStoredPolicy::Fail);
    }

    let summary = add_archive_context(archive_source(&args.source, &config), &args.source)?;

    formatter.format_pack_result(&summary)
}
