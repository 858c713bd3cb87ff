//! Check command - validate every project file

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use kgdev_core::{LoadReport, ProjectDocument};

use super::load_collection;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Fails when any project file is invalid, or on warnings in strict mode.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking project content");

    let report = load_collection(config_path)?;
    let result = review(&report);

    println!("Checking projects...");
    println!("  ✓ {} project(s) valid", report.entries.len());
    if !report.is_clean() {
        println!("  ✗ {} file(s) invalid", report.failures.len());
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Turn a load report into errors and warnings.
fn review(report: &LoadReport) -> ValidationResult {
    let mut result = ValidationResult::default();

    for failure in &report.failures {
        for message in failure.messages() {
            result.add_error(format!("{}: {message}", failure.path.display()));
        }
    }

    for doc in &report.entries {
        check_document(doc, &mut result);
    }

    result
}

/// Content that validates but is probably incomplete.
fn check_document(doc: &ProjectDocument, result: &mut ValidationResult) {
    let entry = &doc.entry;

    if entry.repos.is_empty() && entry.components.is_empty() {
        result.add_warning(format!(
            "{}: lists no repos and no components",
            doc.path.display()
        ));
    }

    if entry
        .website
        .as_deref()
        .is_some_and(|url| url.starts_with("http://"))
    {
        result.add_warning(format!("{}: website is not served over https", doc.path.display()));
    }
}
