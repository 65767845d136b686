use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest;

#[derive(Parser, Debug)]
#[clap(
    name = "cargo-ghrelease",
    version,
    about = "Publish a GitHub release from the latest CHANGELOG.md entry",
    long_about = None,
    bin_name = "cargo"
)]
pub enum CargoCli {
    #[clap(name = "ghrelease")]
    Ghrelease(GhreleaseCli),
}

#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct GhreleaseCli {
    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Changelog file to read releases from
    /// Defaults to CHANGELOG.md
    #[clap(long, global = true)]
    pub changelog: Option<PathBuf>,

    /// Cargo.toml holding the version to release
    /// Defaults to Cargo.toml
    #[clap(long, global = true)]
    pub manifest_path: Option<PathBuf>,

    /// GitHub repository (owner/repo)
    /// If not specified, uses repository from Cargo.toml
    #[clap(long, global = true)]
    pub repository: Option<String>,

    /// GitHub token (can also be set via GITHUB_TOKEN env var)
    #[clap(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub github_token: Option<String>,

    /// Create as draft release
    #[clap(long, global = true)]
    pub draft: bool,

    /// Publish the release title only, without the changelog description
    #[clap(long, global = true)]
    pub no_description: bool,

    /// Configuration file path
    /// Defaults to .config/ghrelease.toml, then the user-wide ghrelease.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,
}

/// Parse `cargo ghrelease ...` or a direct `cargo-ghrelease ...` invocation
pub fn try_parse_from<I, T>(args: I) -> std::result::Result<GhreleaseCli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.get(1).is_some_and(|arg| arg == "ghrelease") {
        let CargoCli::Ghrelease(cli) = CargoCli::try_parse_from(args)?;
        Ok(cli)
    } else {
        GhreleaseCli::try_parse_from(args)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse the changelog and compare it with the manifest version without publishing
    Check {
        /// Print the parsed entries as JSON
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Args {
    pub changelog: Option<PathBuf>,
    pub manifest_path: Option<PathBuf>,
    pub repository: Option<String>,
    pub github_token: Option<String>,
    pub draft: bool,
    pub no_description: bool,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl From<GhreleaseCli> for Args {
    fn from(cli: GhreleaseCli) -> Self {
        Args {
            changelog: cli.changelog,
            manifest_path: cli.manifest_path,
            repository: cli.repository,
            github_token: cli.github_token,
            draft: cli.draft,
            no_description: cli.no_description,
            config: cli.config,
            verbose: cli.verbose,
        }
    }
}

impl Args {
    /// Changelog path, `CHANGELOG.md` unless overridden
    pub fn changelog_path(&self) -> &Path {
        self.changelog
            .as_deref()
            .unwrap_or_else(|| Path::new("CHANGELOG.md"))
    }

    /// Manifest path, `Cargo.toml` unless overridden
    pub fn manifest_path(&self) -> &Path {
        self.manifest_path
            .as_deref()
            .unwrap_or_else(|| Path::new("Cargo.toml"))
    }

    /// Parse repository from argument or Cargo.toml
    pub fn parse_repository(&self) -> Result<(String, String)> {
        match &self.repository {
            Some(repo) => manifest::parse_repo_slug(repo),
            None => manifest::repository(self.manifest_path()),
        }
    }
}
