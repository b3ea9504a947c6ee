//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// mdindex search-index generator CLI
///
/// Walks a directory of markdown posts, parses the frontmatter metadata
/// block of each one, and writes a single JSON array of flat records to
/// stdout (diagnostics go to stderr).
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Posts directory to index. Defaults to the `content` path from the
    /// config file (or `content/posts` when no config file exists).
    #[arg(value_name = "ROOT", value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file name (searched upward from the current directory)
    #[arg(short = 'C', long, default_value = "mdindex.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Write the JSON array to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Route prefix for generated post urls
    #[arg(short = 'p', long)]
    pub route_prefix: Option<String>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["mdindex"]);
        assert!(cli.root.is_none());
        assert_eq!(cli.config, PathBuf::from("mdindex.toml"));
        assert!(cli.output.is_none());
        assert!(!cli.compact);
        assert!(cli.route_prefix.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "mdindex",
            "content/posts",
            "--output",
            "index.json",
            "--compact",
            "-p",
            "/blog/",
        ]);
        assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("content/posts")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("index.json")));
        assert!(cli.compact);
        assert_eq!(cli.route_prefix.as_deref(), Some("/blog/"));
    }
}
