//! Staged-file scan command (pre-commit entry point)

use anyhow::Result;

use crate::cli::Output;

pub async fn execute(format: &str, output: &Output) -> Result<()> {
    crate::hooks::pre_commit::execute(format, output).await
}
