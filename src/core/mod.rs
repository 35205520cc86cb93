//! Core engine for relprep
//!
//! - **config**: Release configuration model (release/config.json)
//! - **context**: Read-only release snapshot for status and tagging
//! - **error**: Error types with contextual help messages and exit codes
//! - **store**: Durable storage with atomic write-replace
//! - **vcs**: Version-control capability (SystemGit)
//! - **version**: Version-of-record and bump lifecycle

pub mod config;
pub mod context;
pub mod error;
pub mod store;
pub mod vcs;
pub mod version;
