//! Command implementations
//!
//! Each subcommand lives in its own module.

pub mod check_message;
pub mod hooks;
pub mod scan;
pub mod version;
