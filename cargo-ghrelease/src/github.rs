use crate::changelog::ReleaseEntry;
use crate::error::{GhReleaseError, Result};
use octocrab::{models::repos::Release, Octocrab};

/// What gets sent to GitHub for one changelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRelease {
    pub tag: String,
    pub name: String,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}

impl NewRelease {
    /// Build the request for `entry`; an empty description is never sent as a body
    pub fn from_entry(entry: &ReleaseEntry, draft: bool, include_description: bool) -> Self {
        let body = (include_description && !entry.release_description.is_empty())
            .then(|| entry.release_description.clone());

        Self {
            tag: entry.tag(),
            name: entry.release_title.clone(),
            body,
            draft,
            prerelease: entry.prerelease,
        }
    }
}

pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self { octocrab })
    }

    /// Create a release, or return the existing one for the same tag
    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        release: &NewRelease,
    ) -> Result<Release> {
        match self
            .octocrab
            .repos(owner, repo)
            .releases()
            .get_by_tag(&release.tag)
            .await
        {
            Ok(existing) => {
                tracing::info!("Release {} already exists, leaving it untouched", release.tag);
                Ok(existing)
            }
            Err(e) => {
                tracing::debug!("No release found for {}: {}", release.tag, e);
                tracing::info!("Creating new release: {}", release.tag);

                let repos = self.octocrab.repos(owner, repo);
                let releases = repos.releases();
                let mut release_builder = releases
                    .create(&release.tag)
                    .name(&release.name)
                    .draft(release.draft)
                    .prerelease(release.prerelease);

                if let Some(body) = &release.body {
                    release_builder = release_builder.body(body);
                }

                release_builder
                    .send()
                    .await
                    .map_err(|e| GhReleaseError::ReleaseCreation {
                        tag: release.tag.clone(),
                        message: e.to_string(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(description: &str, prerelease: bool) -> ReleaseEntry {
        ReleaseEntry {
            version: "1.4.0-rc.1".to_string(),
            release_title: "Candidate".to_string(),
            release_description: description.to_string(),
            prerelease,
        }
    }

    #[test]
    fn test_new_release_from_entry() {
        let release = NewRelease::from_entry(&entry("Fixes.", true), false, true);

        assert_eq!(
            release,
            NewRelease {
                tag: "v1.4.0-rc.1".to_string(),
                name: "Candidate".to_string(),
                body: Some("Fixes.".to_string()),
                draft: false,
                prerelease: true,
            }
        );
    }

    #[test]
    fn test_empty_description_has_no_body() {
        let release = NewRelease::from_entry(&entry("", false), true, true);

        assert_eq!(release.body, None);
        assert!(release.draft);
        assert!(!release.prerelease);
    }

    #[test]
    fn test_description_can_be_disabled() {
        let release = NewRelease::from_entry(&entry("Fixes.", false), false, false);

        assert_eq!(release.body, None);
    }
}
