//! Pre-commit hook implementation
//!
//! Runs the staged-file secret scan before a commit is created. The staged
//! set comes from the git index (Added/Copied/Modified, no deletions); a
//! failed git query degrades to an empty input set so the gate never blocks
//! a commit on infrastructure trouble.

use anyhow::Result;

use crate::cli::Output;
use crate::git::GitOperations;
use crate::scanner::{FileScanner, ScanReport};

/// Execute the pre-commit scan.
pub async fn execute(format: &str, output: &Output) -> Result<()> {
    let (staged, workdir) = match GitOperations::discover() {
        Ok(git) => (
            git.staged_files().unwrap_or_default(),
            git.workdir().map(|p| p.to_path_buf()),
        ),
        Err(_) => {
            output.info("No Git repository found - nothing to scan");
            return Ok(());
        }
    };

    if staged.is_empty() {
        output.success("No staged files to scan");
        return Ok(());
    }

    output.verbose(&format!("Scanning {} staged files", staged.len()));

    // Exclusion rules want repo-relative paths; the staged set is absolute
    let scanner = match workdir {
        Some(root) => FileScanner::with_root(&root)?,
        None => FileScanner::new()?,
    };
    let report = scanner.scan_paths(&staged);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => render_text(&report, output),
    }

    if output.is_verbose() {
        output.verbose(&format!(
            "scanned {} files, skipped {}, {} candidates, {} ms",
            report.stats.files_scanned,
            report.stats.files_skipped,
            report.stats.candidates_seen,
            report.stats.scan_duration_ms
        ));
    }

    if report.flagged_count() > 0 {
        anyhow::bail!(
            "Secret scan failed: {} potential secrets found in staged files",
            report.flagged_count()
        );
    }

    output.success("No secrets found in staged files");
    Ok(())
}

fn render_text(report: &ScanReport, output: &Output) {
    for finding in &report.findings {
        output.finding(&format!(
            "Potential secret [{}] {}",
            finding.family, finding.matched
        ));
        output.file_location(&finding.source, finding.line_number);
        output.indent(&finding.context);
    }

    if report.flagged_count() > 0 {
        output.count("Potential secrets found", report.flagged_count());
    }
}
