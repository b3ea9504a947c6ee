//! Tool configuration from `mdindex.toml`.
//!
//! The config file is optional: when none is found, every field falls back
//! to its default and the posts root resolves relative to the current
//! directory. When a file is found (searching upward from cwd, so the tool
//! can run from anywhere inside a site checkout), relative paths resolve
//! against the config file's directory.
//!
//! ```toml
//! content = "content/posts"
//! route-prefix = "/posts/"
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;
use crate::debug;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Raw file contents of `mdindex.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct FileConfig {
    /// Posts root, relative to the config file
    content: PathBuf,

    /// Prefix prepended to every derived post url
    route_prefix: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content/posts"),
            route_prefix: "/posts/".to_string(),
        }
    }
}

impl FileConfig {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Ok(toml::from_str(&content)?)
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory walked for `.md` posts
    pub posts_dir: PathBuf,

    /// Prefix prepended to every derived post url
    pub route_prefix: String,
}

impl Config {
    /// Load configuration, merging the optional config file with CLI
    /// overrides. A missing config file is not an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (file, base_dir) = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                (FileConfig::from_path(&path)?, dir)
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                let cwd = env::current_dir().context("failed to get current working directory")?;
                (FileConfig::default(), cwd)
            }
        };

        Ok(Self::resolve(file, cli, &base_dir)?)
    }

    /// Apply CLI overrides and validate.
    fn resolve(file: FileConfig, cli: &Cli, base_dir: &Path) -> Result<Self, ConfigError> {
        let route_prefix = cli.route_prefix.clone().unwrap_or(file.route_prefix);
        if !route_prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "route prefix `{route_prefix}` must start with `/`"
            )));
        }

        let posts_dir = match &cli.root {
            Some(root) => root.clone(),
            None => base_dir.join(&file.content),
        };

        Ok(Self {
            posts_dir,
            route_prefix,
        })
    }
}

/// Find the config file by searching upward from the current directory
fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let cwd = env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_file_config_defaults() {
        let file = FileConfig::default();
        assert_eq!(file.content, PathBuf::from("content/posts"));
        assert_eq!(file.route_prefix, "/posts/");
    }

    #[test]
    fn test_file_config_from_toml() {
        let file: FileConfig =
            toml::from_str("content = \"posts\"\nroute-prefix = \"/blog/\"\n").unwrap();
        assert_eq!(file.content, PathBuf::from("posts"));
        assert_eq!(file.route_prefix, "/blog/");
    }

    #[test]
    fn test_file_config_partial_toml() {
        let file: FileConfig = toml::from_str("content = \"posts\"\n").unwrap();
        assert_eq!(file.route_prefix, "/posts/");
    }

    #[test]
    fn test_file_config_rejects_unknown_fields() {
        assert!(toml::from_str::<FileConfig>("posts-dir = \"posts\"\n").is_err());
    }

    #[test]
    fn test_resolve_applies_cli_overrides() {
        let cli = Cli::parse_from(["mdindex", "elsewhere/posts", "-p", "/notes/"]);
        let config = Config::resolve(FileConfig::default(), &cli, Path::new("/site")).unwrap();
        assert_eq!(config.posts_dir, PathBuf::from("elsewhere/posts"));
        assert_eq!(config.route_prefix, "/notes/");
    }

    #[test]
    fn test_resolve_joins_content_to_base_dir() {
        let cli = Cli::parse_from(["mdindex"]);
        let config = Config::resolve(FileConfig::default(), &cli, Path::new("/site")).unwrap();
        assert_eq!(config.posts_dir, PathBuf::from("/site/content/posts"));
        assert_eq!(config.route_prefix, "/posts/");
    }

    #[test]
    fn test_resolve_rejects_bad_route_prefix() {
        let cli = Cli::parse_from(["mdindex", "-p", "posts/"]);
        let err = Config::resolve(FileConfig::default(), &cli, Path::new("/site")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
