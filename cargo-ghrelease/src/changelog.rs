//! Splitting a `CHANGELOG.md` into release entries.
//!
//! Every entry starts with a version heading followed by a title heading:
//!
//! ```text
//! # v1.0.0
//! ## Release title
//! Free-form description...
//! ```
//!
//! Anything before the first version heading is ignored. The newest release
//! is expected first, so the first returned entry is the one to publish.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

/// Message shown whenever the changelog cannot be used as a whole.
pub const BADLY_FORMATTED_CHANGELOG: &str = "Your CHANGELOG.md seems to be badly formatted.
Every item should start with:
# v1.0.0
## Release title";

/// `major.minor(.patch)?` without the leading `v`.
const VERSION_CORE: &str = r"\d+\.\d+(?:\.\d+)?";

/// Prerelease suffix such as `-beta.2`.
const PRERELEASE_SUFFIX: &str = r"-(?:alpha|beta|rc)\.\d+";

/// Start of an entry: a line beginning with `# v1.2.3`.
static BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^# ?v{VERSION_CORE}(?:{PRERELEASE_SUFFIX})?"
    ))
    .expect("Invalid changelog boundary regex")
});

/// Shape of a single entry, anchored at its first byte.
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\A# ?(?P<tag>v{VERSION_CORE}(?P<prerelease>{PRERELEASE_SUFFIX})?)\r?\n(?:## ?(?P<title>[^\r\n]*))?(?P<body>(?s:.*))"
    ))
    .expect("Invalid changelog entry regex")
});

/// One release as written in the changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEntry {
    /// Version without the leading `v`, e.g. `1.0.0-beta.2`.
    pub version: String,
    /// Text of the `##` line below the version heading.
    pub release_title: String,
    /// Everything after the title line, trimmed. May be empty.
    pub release_description: String,
    /// Whether the tag carries an `-alpha.N`, `-beta.N` or `-rc.N` suffix.
    pub prerelease: bool,
}

impl ReleaseEntry {
    /// Git tag for this release (`v` + version).
    pub fn tag(&self) -> String {
        format!("v{}", self.version)
    }
}

/// The changelog has no usable entries, or one of them is malformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", BADLY_FORMATTED_CHANGELOG)]
pub struct MalformedDocument;

/// Why a single entry could not be read. Never leaves this module.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MalformedEntry {
    #[error("entry does not start with a `# v<version>` line")]
    MissingTag,

    #[error("entry has no `## <title>` line below its version")]
    MissingTitle,
}

/// Parse the whole changelog, newest release first.
///
/// Fails with [`MalformedDocument`] when no entry is found or when any entry
/// is malformed; no partial result is ever returned.
pub fn parse_changelog(document: &str) -> Result<Vec<ReleaseEntry>, MalformedDocument> {
    segment(document)?
        .into_iter()
        .map(|entry| {
            extract(entry).map_err(|err| {
                tracing::debug!("Rejecting changelog: {}", err);
                MalformedDocument
            })
        })
        .collect()
}

/// Byte offsets of every entry heading, in document order.
pub fn boundary_offsets(document: &str) -> Vec<usize> {
    BOUNDARY_REGEX
        .find_iter(document)
        .map(|m| m.start())
        .collect()
}

/// Slice the document into one substring per entry.
///
/// Each slice runs from its heading up to the next heading, or to the end of
/// the document for the last one. A leading byte-order mark is skipped.
pub fn segment(document: &str) -> Result<Vec<&str>, MalformedDocument> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let offsets = boundary_offsets(document);
    if offsets.is_empty() {
        return Err(MalformedDocument);
    }

    let ends = offsets.iter().skip(1).copied().chain([document.len()]);
    let entries: Vec<&str> = offsets
        .iter()
        .zip(ends)
        .map(|(&start, end)| &document[start..end])
        .collect();

    tracing::trace!("Found {} changelog entries", entries.len());
    Ok(entries)
}

/// Read one entry produced by [`segment`].
pub(crate) fn extract(entry: &str) -> Result<ReleaseEntry, MalformedEntry> {
    let caps = ENTRY_REGEX
        .captures(entry)
        .ok_or(MalformedEntry::MissingTag)?;

    let tag = caps
        .name("tag")
        .map(|m| m.as_str())
        .filter(|tag| !tag.is_empty())
        .ok_or(MalformedEntry::MissingTag)?;

    let release_title = caps
        .name("title")
        .map(|m| m.as_str())
        .filter(|title| !title.trim().is_empty())
        .ok_or(MalformedEntry::MissingTitle)?;

    let version = tag.strip_prefix('v').unwrap_or(tag);
    let prerelease = caps
        .name("prerelease")
        .is_some_and(|m| !m.as_str().is_empty());
    let release_description = caps.name("body").map_or("", |m| m.as_str().trim());

    Ok(ReleaseEntry {
        version: version.to_string(),
        release_title: release_title.to_string(),
        release_description: release_description.to_string(),
        prerelease,
    })
}
