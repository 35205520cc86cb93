//! Release readiness collaborators
//!
//! - **changelog**: is the changelog complete for the pending release
//!
//! Collaborators sit behind narrow traits so `ReleaseContext` can be built
//! against in-memory fakes in tests.

pub mod changelog;

pub use changelog::{ChangelogCheck, ChangelogFile, ChangelogStatus};
