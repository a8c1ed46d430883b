//! Command handlers behind the CLI routing table.
//!
//! Each canonical operation lives here exactly once; deprecated aliases
//! and flat legacy spellings route into the same handlers so they cannot
//! diverge.

pub mod run;
pub mod template;
