//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use spqr_core::ScaffoldReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
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

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn headline(operation: &str) -> &'static str {
        match operation {
            "coffee" => "Project scaffolding created successfully.",
            _ => "Project created successfully!",
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_scaffold_result(&self, operation: &str, report: &ScaffoldReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let headline = Self::headline(operation);
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {headline}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(headline);
        }

        let _ = self.term.write_line(&format!(
            "  Location:     {}",
            report.project_path.display()
        ));
        let _ = self.term.write_line(&format!(
            "  Directories:  {}",
            Self::format_number(report.directories_created)
        ));
        let _ = self.term.write_line(&format!(
            "  Files:        {}",
            Self::format_number(report.files_written)
        ));

        if let Some(extraction) = &report.extraction {
            let _ = self.term.write_line(&format!(
                "  From starter: {} files, {}",
                Self::format_number(extraction.files_extracted),
                Self::format_size(extraction.bytes_written)
            ));
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration:     {:?}", report.duration));
        }

        if report.has_warnings() {
            let _ = self.term.write_line("");
            if self.use_colors {
                let _ = self
                    .term
                    .write_line(&format!("{}", style("Warnings:").yellow().bold()));
            } else {
                let _ = self.term.write_line("Warnings:");
            }
            for warning in &report.warnings {
                let _ = self.term.write_line(&format!("  - {warning}"));
            }
        }

        Ok(())
    }
}
