//! Index command: walk the posts tree and emit the search-index JSON.
//!
//! Per-file failures are logged and skipped; the run only fails when the
//! posts root itself cannot be enumerated. The output stream always
//! receives a well-formed (possibly empty) JSON array.

mod collect;
mod output;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::log;
use crate::utils::plural_count;

/// Execute the aggregation: collect, process, serialize.
pub fn run(config: &Config, cli: &Cli) -> Result<()> {
    let files = collect::collect_post_files(&config.posts_dir)?;
    log!("index"; "indexing {}", plural_count(files.len(), "post"));

    let records = collect::process_files(&files, &config.route_prefix);
    let failures = files.len() - records.len();
    if failures > 0 {
        log!("warning"; "skipped {}", plural_count(failures, "unreadable file"));
    }

    output::write_records(&records, cli)?;
    log!("index"; "wrote {}", plural_count(records.len(), "record"));
    Ok(())
}
