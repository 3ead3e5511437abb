//! Commit-message scan command (commit-msg entry point)

use anyhow::Result;

use crate::cli::Output;

pub async fn execute(file: Option<&str>, output: &Output) -> Result<()> {
    crate::hooks::commit_msg::execute(file, output).await
}
