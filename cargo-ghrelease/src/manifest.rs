use cargo_manifest::{Manifest, MaybeInherited};
use std::path::{Path, PathBuf};

use crate::error::{GhReleaseError, Result};

fn load(path: &Path) -> Result<Manifest> {
    Manifest::from_path(path).map_err(|e| GhReleaseError::Manifest {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Find the workspace manifest by looking up parent directories of `path`
fn find_workspace_manifest(path: &Path) -> Option<Manifest> {
    let absolute = std::path::absolute(path).ok()?;
    let mut current_dir: PathBuf = absolute.parent()?.to_path_buf();

    loop {
        let manifest_path = current_dir.join("Cargo.toml");
        if manifest_path.exists() {
            if let Ok(manifest) = Manifest::from_path(&manifest_path) {
                if manifest.workspace.is_some() {
                    return Some(manifest);
                }
            }
        }

        if !current_dir.pop() {
            return None;
        }
    }
}

/// Version the next release is expected to have.
///
/// Reads `[package].version`, following `version.workspace = true` up to the
/// workspace root, or `[workspace.package].version` for a virtual manifest.
pub fn package_version(path: &Path) -> Result<String> {
    let manifest = load(path)?;

    let version = match manifest.package.and_then(|package| package.version) {
        Some(MaybeInherited::Local(version)) => Some(version),
        Some(MaybeInherited::Inherited { .. }) | None => {
            find_workspace_manifest(path)
                .and_then(|ws| ws.workspace?.package?.version)
        }
    };

    version.ok_or_else(|| GhReleaseError::Manifest {
        path: path.display().to_string(),
        message: "no version field found".to_string(),
    })
}

/// GitHub `(owner, repo)` from the manifest's `repository` URL.
pub fn repository(path: &Path) -> Result<(String, String)> {
    let manifest = load(path)?;

    let url = match manifest.package.and_then(|package| package.repository) {
        Some(MaybeInherited::Local(url)) => Some(url),
        Some(MaybeInherited::Inherited { .. }) | None => {
            find_workspace_manifest(path)
                .and_then(|ws| ws.workspace?.package?.repository)
        }
    }
    .ok_or_else(|| GhReleaseError::Manifest {
        path: path.display().to_string(),
        message: "no repository field found".to_string(),
    })?;

    parse_github_url(&url)
}

/// Parse `https://github.com/owner/repo(.git)?`
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");
    trimmed
        .strip_prefix("https://github.com/")
        .or_else(|| trimmed.strip_prefix("http://github.com/"))
        .ok_or_else(|| GhReleaseError::InvalidRepo(url.to_string()))
        .and_then(parse_repo_slug)
}

/// Parse `owner/repo`
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    match slug.split('/').collect::<Vec<_>>().as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(GhReleaseError::InvalidRepo(slug.to_string())),
    }
}
