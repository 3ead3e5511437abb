//! Commit-msg hook implementation
//!
//! Scans the commit message for leaked infrastructure details and
//! secret-shaped text. Message text is resolved from the hook-provided file,
//! the repository's pending message file, the latest commit, or piped stdin,
//! in that order; no obtainable content is a no-op success.

use anyhow::Result;
use std::io::Read;

use crate::cli::Output;
use crate::git::GitOperations;
use crate::scanner::scan_message;

/// Execute the commit-message scan.
pub async fn execute(file: Option<&str>, output: &Output) -> Result<()> {
    let message = match resolve_message(file) {
        Some(message) if !message.trim().is_empty() => message,
        _ => {
            output.success("No commit message to scan");
            return Ok(());
        }
    };

    let report = scan_message(&message);

    // Email warnings are advisory and never block the commit
    for warning in &report.warnings {
        output.warning(&format!("{}: {}", warning.category, warning.detail));
    }

    if report.is_blocking() {
        for issue in &report.issues {
            output.error(&format!("{}: {}", issue.category, issue.detail));
        }
        anyhow::bail!(
            "Commit message check failed: {} issues found",
            report.issues.len()
        );
    }

    output.success("Commit message is clean");
    Ok(())
}

/// Resolve message text in priority order: explicit file argument, the
/// pending commit-message file, the most recent commit's message, piped
/// stdin. Returns None when no content is obtainable.
fn resolve_message(file: Option<&str>) -> Option<String> {
    if let Some(path) = file {
        match std::fs::read_to_string(path) {
            Ok(message) => return Some(message),
            // Unreadable argument falls through to the remaining sources
            Err(e) => tracing::debug!("cannot read message file {path}: {e}"),
        }
    }

    if let Ok(git) = GitOperations::discover() {
        if let Some(path) = git.pending_commit_message_file() {
            if let Ok(message) = std::fs::read_to_string(path) {
                return Some(message);
            }
        }
        if let Some(message) = git.last_commit_message() {
            return Some(message);
        }
    }

    // Piped input only; reading an interactive terminal would hang the hook
    if !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        if std::io::stdin().read_to_string(&mut buffer).is_ok() {
            return Some(buffer);
        }
    }

    None
}
