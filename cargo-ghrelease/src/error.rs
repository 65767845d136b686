use thiserror::Error;

use crate::changelog::MalformedDocument;

#[derive(Error, Debug)]
pub enum GhReleaseError {
    #[error("GitHub API error: {0}")]
    GitHubApi(Box<octocrab::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    MalformedChangelog(#[from] MalformedDocument),

    #[error(
        "Version mismatch: manifest says {expected} but the latest CHANGELOG.md entry is {found}"
    )]
    VersionMismatch { expected: String, found: String },

    #[error("GitHub token not found. Set GITHUB_TOKEN or pass --github-token")]
    MissingToken,

    #[error("Invalid repository format '{0}'. Expected: owner/repo")]
    InvalidRepo(String),

    #[error("Manifest error at {path}: {message}")]
    Manifest { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Release creation failed for {tag}: {message}")]
    ReleaseCreation { tag: String, message: String },
}

pub type Result<T> = std::result::Result<T, GhReleaseError>;

impl From<octocrab::Error> for GhReleaseError {
    fn from(err: octocrab::Error) -> Self {
        GhReleaseError::GitHubApi(Box::new(err))
    }
}
