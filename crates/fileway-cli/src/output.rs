//! Output formatting for CLI results.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use console::Term;
use console::style;
use fileway_core::ExtractReport;
use fileway_core::PackReport;
use indicatif::ProgressBar;
use serde::Serialize;

/// Common output formatter trait.
pub trait OutputFormatter {
    /// Format the result of a pack operation.
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()>;

    /// Format the result of an extract operation.
    fn format_extract_result(&self, dest: &Path, report: &ExtractReport) -> Result<()>;

    /// Format a single-value result (hash, mime type, stat, copy summary).
    fn format_value(&self, operation: &str, value: &str) -> Result<()>;
}

/// Creates an output formatter based on CLI flags.
pub fn create_formatter(json: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(verbose, quiet))
    }
}

/// A spinner for long-running operations, hidden when quiet or not a TTY.
pub fn spinner(quiet: bool, message: &'static str) -> ProgressBar {
    if quiet || !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn headline(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Archive created: {}", archive.display()));
        let _ = self
            .term
            .write_line(&format!("  Files added: {}", report.files_added));
        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Bytes read:  {}",
                Self::format_size(report.bytes_read)
            ));
        }

        Ok(())
    }

    fn format_extract_result(&self, dest: &Path, report: &ExtractReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Extraction complete: {}", dest.display()));
        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted));
        let _ = self
            .term
            .write_line(&format!("  Directories: {}", report.directories_created));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));

        Ok(())
    }

    fn format_value(&self, _operation: &str, value: &str) -> Result<()> {
        // The value is the command's output; quiet only suppresses
        // decorations.
        let _ = self.term.write_line(value);
        Ok(())
    }
}

struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<T: Serialize> {
    operation: String,
    status: &'static str,
    data: T,
}

impl JsonFormatter {
    fn emit<T: Serialize>(operation: &str, data: T) -> Result<()> {
        let output = JsonOutput {
            operation: operation.to_owned(),
            status: "success",
            data,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()> {
        Self::emit(
            "pack",
            serde_json::json!({
                "archive": archive.display().to_string(),
                "files_added": report.files_added,
                "bytes_read": report.bytes_read,
            }),
        )
    }

    fn format_extract_result(&self, dest: &Path, report: &ExtractReport) -> Result<()> {
        Self::emit(
            "extract",
            serde_json::json!({
                "dest": dest.display().to_string(),
                "files_extracted": report.files_extracted,
                "directories_created": report.directories_created,
                "bytes_written": report.bytes_written,
            }),
        )
    }

    fn format_value(&self, operation: &str, value: &str) -> Result<()> {
        Self::emit(operation, serde_json::json!({ "value": value }))
    }
}
