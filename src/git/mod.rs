//! Git integration layer
//!
//! High-level interface over git2 for the two scanner entry points: staged
//! file enumeration, commit-message sources, and hook installation. All
//! operations here are read-only with respect to git state except hook file
//! management under `.git/hooks`.

use anyhow::{Context, Result};
use git2::{Repository, Status, StatusOptions};
use std::path::{Path, PathBuf};

/// Git operations handler.
pub struct GitOperations {
    repo: Repository,
}

impl GitOperations {
    /// Discover and open the repository from the current directory.
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".").context("No Git repository found")?;
        Ok(Self { repo })
    }

    /// Get staged files in Added/Copied/Modified state, excluding deletions.
    /// Paths are joined onto the working directory so they can be read directly.
    pub fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let mut status_opts = StatusOptions::new();
        status_opts.include_ignored(false);
        status_opts.include_untracked(false);

        let statuses = self
            .repo
            .statuses(Some(&mut status_opts))
            .context("Failed to get repository status")?;
        let workdir = self
            .repo
            .workdir()
            .context("Repository has no working directory")?;

        let mut files = Vec::new();
        for entry in statuses.iter() {
            let status = entry.status();
            if status.intersects(
                Status::INDEX_NEW
                    | Status::INDEX_MODIFIED
                    | Status::INDEX_RENAMED
                    | Status::INDEX_TYPECHANGE,
            ) && !status.contains(Status::INDEX_DELETED)
            {
                if let Some(path) = entry.path() {
                    files.push(workdir.join(path));
                }
            }
        }

        Ok(files)
    }

    /// Path of the pending commit-message file, if one exists.
    pub fn pending_commit_message_file(&self) -> Option<PathBuf> {
        let path = self.repo.path().join("COMMIT_EDITMSG");
        path.exists().then_some(path)
    }

    /// Message of the most recent commit, if the repository has one.
    pub fn last_commit_message(&self) -> Option<String> {
        let commit = self.repo.head().ok()?.peel_to_commit().ok()?;
        commit.message().map(|m| m.to_string())
    }

    /// Working directory path.
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Install a git hook script, making it executable on unix.
    pub fn install_hook(&self, hook_name: &str, hook_content: &str) -> Result<()> {
        let hooks_dir = self.repo.path().join("hooks");
        let hook_path = hooks_dir.join(hook_name);

        std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;
        std::fs::write(&hook_path, hook_content).context("Failed to write hook file")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&hook_path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&hook_path, perms)
                .context("Failed to set hook file permissions")?;
        }

        Ok(())
    }

    /// Remove a git hook; missing hooks are not an error.
    pub fn remove_hook(&self, hook_name: &str) -> Result<()> {
        let hook_path = self.repo.path().join("hooks").join(hook_name);
        if hook_path.exists() {
            std::fs::remove_file(&hook_path).context("Failed to remove hook file")?;
        }
        Ok(())
    }

    /// Check if a hook exists.
    pub fn hook_exists(&self, hook_name: &str) -> bool {
        self.repo.path().join("hooks").join(hook_name).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn init_repo(dir: &TempDir) {
        Command::new("git")
            .args(["init"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        Command::new("git")
            .args(["config", "user.email", "dev@localhost"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        Command::new("git")
            .args(["config", "user.name", "Dev"])
            .current_dir(dir.path())
            .output()
            .unwrap();
    }

    fn open(dir: &TempDir) -> GitOperations {
        GitOperations {
            repo: Repository::open(dir.path()).unwrap(),
        }
    }

    #[test]
    fn test_staged_files_reflect_index() {
        let dir = TempDir::new().unwrap();
        init_repo(&dir);

        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        fs::write(dir.path().join("b.txt"), "beta\n").unwrap();
        Command::new("git")
            .args(["add", "a.txt"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        let git = open(&dir);
        let staged = git.staged_files().unwrap();
        assert_eq!(staged.len(), 1);
        assert!(staged[0].ends_with("a.txt"));
    }

    #[test]
    fn test_hook_install_and_remove() {
        let dir = TempDir::new().unwrap();
        init_repo(&dir);

        let git = open(&dir);
        git.install_hook("pre-commit", "#!/bin/sh\nexit 0\n").unwrap();
        assert!(git.hook_exists("pre-commit"));

        git.remove_hook("pre-commit").unwrap();
        assert!(!git.hook_exists("pre-commit"));
        // Removing twice is a no-op
        git.remove_hook("pre-commit").unwrap();
    }

    #[test]
    fn test_last_commit_message() {
        let dir = TempDir::new().unwrap();
        init_repo(&dir);

        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        Command::new("git")
            .args(["add", "a.txt"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        Command::new("git")
            .args(["commit", "-m", "initial import"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        let git = open(&dir);
        assert!(git.last_commit_message().unwrap().contains("initial import"));
    }
}
