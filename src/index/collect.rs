//! Post discovery and per-file processing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;

use crate::frontmatter;
use crate::record::{self, Record};

/// File suffix selecting eligible posts. No content sniffing.
const POST_SUFFIX: &str = ".md";

/// Collect all post files under `root` recursively.
///
/// Selection is purely by filename suffix; other files are skipped
/// silently. Walk order is whatever the filesystem yields - no sort is
/// applied.
pub fn collect_post_files(root: &Path) -> Result<Vec<PathBuf>> {
    // Probe the root first: a missing or unreadable root is fatal, while
    // errors deeper in the tree only lose that subtree.
    fs::read_dir(root)
        .with_context(|| format!("cannot read posts directory {}", root.display()))?;

    Ok(WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(POST_SUFFIX))
        })
        .map(|e| e.path())
        .collect())
}

/// Process all post files in parallel, keeping encounter order.
///
/// Each file is independent: a failure is reported on stderr and the file
/// is omitted from the result, the rest of the run continues. The indexed
/// collect keeps record order equal to walk order regardless of thread
/// scheduling.
pub fn process_files(files: &[PathBuf], route_prefix: &str) -> Vec<Record> {
    files
        .par_iter()
        .map(|file| {
            let name = file_name(file);
            match process_file(file, route_prefix) {
                Ok(record) => {
                    eprintln!("Processed: {name}");
                    Some(record)
                }
                Err(e) => {
                    eprintln!("Error processing {name}: {e}");
                    None
                }
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Process a single post file into its flat record.
///
/// Fails when the file cannot be read as UTF-8 text. The metadata block
/// shape is never an error: an unrecognized block just yields an empty
/// mapping with the whole content as body.
pub fn process_file(path: &Path, route_prefix: &str) -> Result<Record> {
    let source = fs::read_to_string(path)?;
    let (meta, body) = frontmatter::parse(&source);
    Ok(record::build(path, meta, body, route_prefix))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
