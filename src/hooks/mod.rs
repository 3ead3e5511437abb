//! Git hook entry points
//!
//! Each installed hook script invokes the matching subcommand, which lands
//! here. Hooks never mutate git state; they report findings and signal the
//! block through a nonzero exit code.

pub mod commit_msg;
pub mod pre_commit;

use anyhow::Result;

use crate::cli::Output;

/// Dispatch a hook by its git name.
pub async fn run(name: &str, arg: Option<&str>, output: &Output) -> Result<()> {
    match name {
        "pre-commit" => pre_commit::execute("text", output).await,
        "commit-msg" => commit_msg::execute(arg, output).await,
        other => anyhow::bail!("Unknown hook: {other}"),
    }
}
