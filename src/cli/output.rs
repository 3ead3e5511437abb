//! Console output handling
//!
//! Consistent, styled CLI output. All presentation lives here; the scanners
//! return structured findings and never print.

use console::style;

/// Output handler for consistent CLI formatting.
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message. Errors are always shown, even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message.
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only when verbose mode is enabled).
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print a flagged finding line. Findings are report content and go to
    /// stdout, always shown even in quiet mode.
    pub fn finding(&self, message: &str) {
        println!("{} {}", style("✖").red(), message);
    }

    /// Print an indented detail line.
    pub fn indent(&self, message: &str) {
        println!("    {}", message);
    }

    /// Print a file location.
    pub fn file_location(&self, file: &str, line: usize) {
        println!(
            "    {} {}:{}",
            style("•").cyan(),
            style(file).underlined(),
            style(line.to_string()).yellow()
        );
    }

    /// Print a count summary.
    pub fn count(&self, message: &str, count: usize) {
        if !self.quiet {
            println!(
                "{} {} {}",
                style("❯").cyan().bold(),
                style(message).bold(),
                style(format!("({})", count)).dim()
            );
        }
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        println!("  • {}", item);
    }
}
