//! Source-level exclusion for the staged-file scanner
//!
//! Two checks run before a staged path is read: path exclusion (version-control
//! metadata, build/dependency/cache directories, environment-example files) and
//! binary sniffing on a sample read. Excluded sources never produce candidates.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Paths matching any of these rules are never scanned.
const EXCLUDE_RULES: &[&str] = &[
    ".git/**",
    "**/.git/**",
    "node_modules/**",
    "**/node_modules/**",
    "target/**",
    "**/target/**",
    "vendor/**",
    "**/vendor/**",
    "dist/**",
    "**/dist/**",
    "build/**",
    "**/build/**",
    ".cache/**",
    "**/.cache/**",
    "__pycache__/**",
    "**/__pycache__/**",
    "*.env.example",
    "**/*.env.example",
    ".env.example",
    "**/.env.example",
];

/// Number of bytes sampled when sniffing for binary content.
const BINARY_SAMPLE_BYTES: usize = 8192;

/// Compiled exclusion rules, built once per invocation.
pub struct ExclusionRules {
    globset: GlobSet,
}

impl ExclusionRules {
    pub fn new() -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for rule in EXCLUDE_RULES {
            let glob = Glob::new(rule).with_context(|| format!("Invalid exclude rule: {rule}"))?;
            builder.add(glob);
        }
        let globset = builder
            .build()
            .context("Failed to build exclusion globset")?;
        Ok(Self { globset })
    }

    /// Check whether a staged path is excluded from scanning. Callers pass
    /// repo-relative paths; an absolute path would let directory names above
    /// the repository trip the rules.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.globset.is_match(path)
    }
}

/// Sniff a file for binary content: a NUL byte anywhere in the sample marks it
/// binary. Unreadable files are treated as binary so they are skipped rather
/// than aborting the scan.
pub fn is_binary(path: &Path) -> bool {
    let mut sample = [0u8; BINARY_SAMPLE_BYTES];
    match File::open(path).and_then(|mut f| f.read(&mut sample)) {
        Ok(n) => sample[..n].contains(&0),
        Err(_) => true,
    }
}
