//! Integration tests for relprep
//!
//! Each test builds a throwaway git repository with a `release/` directory and
//! drives the compiled binary against it.

mod helpers;

mod test_bump;
mod test_init;
mod test_status;
mod test_tag;
