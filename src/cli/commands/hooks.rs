//! Hook management commands

use anyhow::{Context, Result};

use crate::cli::{HooksCommands, Output};
use crate::git::GitOperations;

const MANAGED_HOOKS: &[(&str, &str)] = &[
    (
        "pre-commit",
        "#!/bin/sh\n# Installed by leakgate\nexec leakgate scan\n",
    ),
    (
        "commit-msg",
        "#!/bin/sh\n# Installed by leakgate\nexec leakgate check-message \"$1\"\n",
    ),
];

pub async fn execute(cmd: HooksCommands, output: &Output) -> Result<()> {
    match cmd {
        HooksCommands::Install => {
            let git = install_target()?;
            for (name, content) in MANAGED_HOOKS {
                git.install_hook(name, content)
                    .with_context(|| format!("Failed to install {name} hook"))?;
                output.success(&format!("Installed {name} hook"));
            }
            Ok(())
        }
        HooksCommands::Uninstall => {
            let git = install_target()?;
            for (name, _) in MANAGED_HOOKS {
                git.remove_hook(name)
                    .with_context(|| format!("Failed to remove {name} hook"))?;
                output.success(&format!("Removed {name} hook"));
            }
            Ok(())
        }
        HooksCommands::List => {
            let git = install_target()?;
            for (name, _) in MANAGED_HOOKS {
                let status = if git.hook_exists(name) {
                    "installed"
                } else {
                    "not installed"
                };
                output.list_item(&format!("{name}: {status}"));
            }
            Ok(())
        }
        HooksCommands::Run { hook, arg } => crate::hooks::run(&hook, arg.as_deref(), output).await,
    }
}

fn install_target() -> Result<GitOperations> {
    GitOperations::discover().context("Hook management requires a git repository")
}
