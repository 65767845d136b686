use cargo_ghrelease::cli::{self, Args, CargoCli, Command, GhreleaseCli};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};

#[test]
fn test_default_paths() {
    let args = Args::default();

    assert_eq!(args.changelog_path(), Path::new("CHANGELOG.md"));
    assert_eq!(args.manifest_path(), Path::new("Cargo.toml"));
}

#[test]
fn test_paths_override() {
    let args = Args {
        changelog: Some(PathBuf::from("docs/CHANGES.md")),
        manifest_path: Some(PathBuf::from("crates/app/Cargo.toml")),
        ..Args::default()
    };

    assert_eq!(args.changelog_path(), Path::new("docs/CHANGES.md"));
    assert_eq!(args.manifest_path(), Path::new("crates/app/Cargo.toml"));
}

#[test]
fn test_parse_repository_from_arg() {
    let args = Args {
        repository: Some("owner/repo".to_string()),
        ..Args::default()
    };

    let (owner, repo) = args.parse_repository().unwrap();
    assert_eq!(owner, "owner");
    assert_eq!(repo, "repo");
}

#[test]
fn test_parse_repository_invalid_format() {
    let args = Args {
        repository: Some("invalid-format".to_string()),
        ..Args::default()
    };

    assert!(args.parse_repository().is_err());
}

#[test]
fn test_parse_cargo_subcommand() {
    let CargoCli::Ghrelease(cli) = CargoCli::try_parse_from([
        "cargo",
        "ghrelease",
        "--changelog",
        "HISTORY.md",
        "--draft",
        "--no-description",
    ])
    .unwrap();

    assert!(cli.command.is_none());
    let args: Args = cli.into();
    assert_eq!(args.changelog, Some(PathBuf::from("HISTORY.md")));
    assert!(args.draft);
    assert!(args.no_description);
    assert_eq!(args.config, None);
}

#[test]
fn test_parse_check_command() {
    let cli =
        GhreleaseCli::try_parse_from(["cargo-ghrelease", "check", "--json", "--verbose"]).unwrap();

    assert!(matches!(cli.command, Some(Command::Check { json: true })));
    assert!(cli.verbose);
}

#[test]
fn test_help_and_version_through_cargo_subcommand() {
    let help = cli::try_parse_from(["cargo-ghrelease", "ghrelease", "--help"]).unwrap_err();
    assert_eq!(help.kind(), ErrorKind::DisplayHelp);

    let version = cli::try_parse_from(["cargo-ghrelease", "ghrelease", "--version"]).unwrap_err();
    assert_eq!(version.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn test_parse_either_invocation() {
    let via_cargo = cli::try_parse_from(["cargo", "ghrelease", "check"]).unwrap();
    assert!(matches!(via_cargo.command, Some(Command::Check { json: false })));

    let direct = cli::try_parse_from(["cargo-ghrelease", "--config", "release.toml"]).unwrap();
    assert!(direct.command.is_none());
    assert_eq!(direct.config, Some(PathBuf::from("release.toml")));

    let bad = cli::try_parse_from(["cargo-ghrelease", "--bogus"]).unwrap_err();
    assert_eq!(bad.kind(), ErrorKind::UnknownArgument);
}
