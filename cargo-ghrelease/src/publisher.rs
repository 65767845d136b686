use anyhow::{Context, Result};
use std::path::Path;

use crate::changelog::{self, ReleaseEntry};
use crate::cli::Args;
use crate::config::Config;
use crate::error::{GhReleaseError, Result as GhResult};
use crate::github::{GitHubClient, NewRelease};
use crate::manifest;

/// Read and parse the changelog at `path`
pub fn read_changelog(path: &Path) -> Result<Vec<ReleaseEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let entries = changelog::parse_changelog(&content).map_err(GhReleaseError::from)?;
    tracing::debug!("Parsed {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// The newest entry, which must describe the version from the manifest
pub fn latest_matching<'a>(
    entries: &'a [ReleaseEntry],
    expected: &str,
) -> GhResult<&'a ReleaseEntry> {
    let latest = entries
        .first()
        .ok_or(GhReleaseError::MalformedChangelog(changelog::MalformedDocument))?;

    if latest.version != expected {
        return Err(GhReleaseError::VersionMismatch {
            expected: expected.to_string(),
            found: latest.version.clone(),
        });
    }

    Ok(latest)
}

pub struct ReleasePublisher {
    args: Args,
}

impl ReleasePublisher {
    pub fn new(mut args: Args) -> Result<Self> {
        let config =
            Config::load(args.config.as_deref()).context("Failed to load configuration")?;

        config.merge_with_args(&mut args);

        Ok(Self { args })
    }

    /// Parse the changelog and check it against the manifest version.
    ///
    /// Returns the entry to publish along with every parsed entry.
    pub fn prepare(&self) -> Result<(ReleaseEntry, Vec<ReleaseEntry>)> {
        let entries = read_changelog(self.args.changelog_path())?;
        let expected = manifest::package_version(self.args.manifest_path())?;
        tracing::info!("Manifest version: {}", expected);

        let latest = latest_matching(&entries, &expected)?.clone();
        Ok((latest, entries))
    }

    /// Validate without publishing, printing the parsed entries
    pub fn check(&self, json: bool) -> Result<()> {
        let (_, entries) = self.prepare()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for entry in &entries {
                let marker = if entry.prerelease { " (prerelease)" } else { "" };
                println!("{} - {}{}", entry.tag(), entry.release_title, marker);
            }
        }

        tracing::info!("{} is ready to be released", self.args.changelog_path().display());
        Ok(())
    }

    /// Publish the newest changelog entry as a GitHub release
    pub async fn run(&self) -> Result<()> {
        let (latest, _) = self.prepare()?;

        let (owner, repo) = self.args.parse_repository()?;
        tracing::info!("Repository: {}/{}", owner, repo);

        let token = self
            .args
            .github_token
            .clone()
            .ok_or(GhReleaseError::MissingToken)?;
        let github_client = GitHubClient::new(token)?;

        let request = NewRelease::from_entry(&latest, self.args.draft, !self.args.no_description);
        tracing::info!("Publishing {} \"{}\"", request.tag, request.name);

        let release = github_client.create_release(&owner, &repo, &request).await?;

        tracing::info!("Release URL: {}", release.html_url);
        Ok(())
    }
}
