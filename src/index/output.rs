//! Record serialization and output.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::log;
use crate::record::Record;

/// Serialize the collection and write it to stdout or `--output`.
///
/// Always emits a well-formed array - an empty run produces `[]`, never
/// silence. Pretty printing is the default for diffability; serde_json
/// leaves non-ASCII text unescaped.
pub fn write_records(records: &[Record], cli: &Cli) -> Result<()> {
    let formatted = if cli.compact {
        serde_json::to_string(records)?
    } else {
        serde_json::to_string_pretty(records)?
    };

    if let Some(ref output_path) = cli.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("index"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}
