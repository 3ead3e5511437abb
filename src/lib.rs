//! # leakgate - secret gate for git staged files and commit messages
//!
//! Two independent scanners sharing one entropy primitive:
//!
//! - **Staged-file scanner**: enumerates Added/Copied/Modified files in the
//!   git index, filters excluded paths and binaries, and classifies
//!   secret-shaped matches as high-confidence or entropy-gated.
//! - **Commit-message scanner**: applies a separate, text-oriented pattern
//!   table (private IPs, password/credential pairs, high-entropy tokens,
//!   email addresses) to a single message blob.
//!
//! Both are wired as git hooks; a blocking finding maps to exit code 1 and
//! the hook framework blocks the commit.
//!
//! ```bash
//! leakgate hooks install
//! leakgate scan
//! leakgate check-message .git/COMMIT_EDITMSG
//! ```

pub mod cli;
pub mod git;
pub mod hooks;
pub mod scanner;

pub use cli::{Cli, Output};
pub use scanner::{FileScanner, ScanReport};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
