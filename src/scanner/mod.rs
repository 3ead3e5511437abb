//! Secret detection: pattern matching, allowlist filtering, and entropy
//! scoring for staged files and commit messages.

pub mod allowlist;
pub mod core;
pub mod entropy;
pub mod exclude;
pub mod message;
pub mod patterns;
pub mod types;

pub use core::FileScanner;
pub use message::{scan_message, MessageReport};
pub use types::{Classification, Finding, ScanReport, ScanStats};
