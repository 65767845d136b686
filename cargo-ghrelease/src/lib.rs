//! # cargo-ghrelease
//!
//! A cargo subcommand for publishing GitHub releases from `CHANGELOG.md`.
//!
//! ## Overview
//!
//! `cargo-ghrelease` reads the changelog, takes its newest entry, checks that
//! the entry's version matches the version in `Cargo.toml`, and creates a
//! GitHub release tagged `v<version>` with the entry's title and description.
//!
//! ## Changelog Format
//!
//! ```markdown
//! # v1.1.0-beta.1
//! ## Release title
//! Description, any markdown.
//!
//! # v1.0.0
//! ## First release
//! ```
//!
//! Versions are `v<major>.<minor>(.<patch>)?` with an optional
//! `-alpha.N`, `-beta.N` or `-rc.N` suffix, which marks the release as a
//! prerelease. Text before the first version heading is ignored.
//!
//! ## Usage
//!
//! ```bash
//! # Publish the newest entry
//! GITHUB_TOKEN=... cargo ghrelease
//!
//! # Validate the changelog without publishing
//! cargo ghrelease check --json
//! ```
//!
//! ## Configuration
//!
//! Configuration can be specified in `.config/ghrelease.toml` in your project
//! directory or `~/.config/ghrelease.toml` for user-wide settings.

/// Changelog segmentation and entry extraction
pub mod changelog;

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration file handling and default settings management
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// GitHub API client for creating releases
pub mod github;

/// Version and repository lookup in Cargo.toml
pub mod manifest;

/// Orchestrates reading, validating and publishing a release
pub mod publisher;

pub use changelog::{parse_changelog, MalformedDocument, ReleaseEntry};
