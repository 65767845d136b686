use cargo_ghrelease::changelog::{boundary_offsets, segment};
use cargo_ghrelease::{parse_changelog, MalformedDocument, ReleaseEntry};
use pretty_assertions::assert_eq;

const CHANGELOG: &str = "\
Changelog
=========

Releases are listed newest first.

# v1.1.0-rc.1
## Release candidate

- Faster startup
- New `check` command

# v1.0.1
## Patch release
Fixes a crash on empty input.

# v1.0.0
## First release
";

#[test]
fn test_parse_full_changelog() {
    let entries = parse_changelog(CHANGELOG).unwrap();

    assert_eq!(
        entries,
        vec![
            ReleaseEntry {
                version: "1.1.0-rc.1".to_string(),
                release_title: "Release candidate".to_string(),
                release_description: "- Faster startup\n- New `check` command".to_string(),
                prerelease: true,
            },
            ReleaseEntry {
                version: "1.0.1".to_string(),
                release_title: "Patch release".to_string(),
                release_description: "Fixes a crash on empty input.".to_string(),
                prerelease: false,
            },
            ReleaseEntry {
                version: "1.0.0".to_string(),
                release_title: "First release".to_string(),
                release_description: String::new(),
                prerelease: false,
            },
        ]
    );
}

#[test]
fn test_segments_cover_document_after_preamble() {
    let offsets = boundary_offsets(CHANGELOG);
    let entries = segment(CHANGELOG).unwrap();

    assert_eq!(offsets.len(), 3);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries.concat(), &CHANGELOG[offsets[0]..]);
    assert!(entries.iter().all(|entry| entry.starts_with("# v")));
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse_changelog(CHANGELOG), parse_changelog(CHANGELOG));
}

#[test]
fn test_one_bad_entry_rejects_everything() {
    let broken = CHANGELOG.replace("## Patch release\n", "");

    assert_eq!(parse_changelog(&broken), Err(MalformedDocument));
}

#[test]
fn test_no_version_headings() {
    assert_eq!(segment("## Unreleased\n- wip\n"), Err(MalformedDocument));
    assert_eq!(parse_changelog("no valid content here"), Err(MalformedDocument));
}
