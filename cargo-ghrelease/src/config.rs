use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GhReleaseError, Result};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DefaultConfig {
    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,

    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default)]
    pub draft: bool,

    /// Publish the changelog description as the release body
    #[serde(default = "default_description")]
    pub description: bool,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            changelog: default_changelog(),
            manifest: default_manifest(),
            draft: false,
            description: default_description(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RepositoryConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
}

/// Project configuration file, relative to the working directory
pub const PROJECT_CONFIG: &str = ".config/ghrelease.toml";

fn default_changelog() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

fn default_description() -> bool {
    true
}

impl Config {
    /// Load configuration from an explicit `path`, or from the project file
    /// falling back to the user-wide one
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(path, &Self::default_path()) {
            Some(path) => {
                tracing::debug!("Using configuration: {}", path.display());
                Self::load_file(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Pick the file to read. An explicit path never falls back to `user_path`.
    fn resolve_path(explicit: Option<&Path>, user_path: &Path) -> Option<PathBuf> {
        let candidates = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => vec![PathBuf::from(PROJECT_CONFIG), user_path.to_path_buf()],
        };

        candidates.into_iter().find(|path| path.exists())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| GhReleaseError::Config(format!("{}: {e}", path.display())))
    }

    /// Get the user-wide configuration file path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("ghrelease.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/ghrelease.toml"))
    }

    /// Merge configuration with command line arguments
    pub fn merge_with_args(&self, args: &mut crate::cli::Args) {
        if args.changelog.is_none() {
            args.changelog = Some(self.default.changelog.clone());
        }

        if args.manifest_path.is_none() {
            args.manifest_path = Some(self.default.manifest.clone());
        }

        if !args.draft && self.default.draft {
            args.draft = true;
        }

        if !self.default.description {
            args.no_description = true;
        }

        if args.repository.is_none() {
            if let (Some(owner), Some(repo)) = (&self.repository.owner, &self.repository.repo) {
                args.repository = Some(format!("{owner}/{repo}"));
            }
        }
    }
}
