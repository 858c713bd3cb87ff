//! Show command - print one normalized project as JSON

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use kgdev_core::LoadReport;

use super::load_collection;

/// Run the show command.
pub fn run(config_path: &Path, slug: &str) -> Result<()> {
    tracing::info!(?config_path, slug, "Showing project");

    let report = load_collection(config_path)?;
    println!("{}", render(&report, slug)?);
    Ok(())
}

fn render(report: &LoadReport, slug: &str) -> Result<String> {
    if let Some(doc) = report.get(slug) {
        return Ok(serde_json::to_string_pretty(&doc.entry)?);
    }

    // Distinguish "invalid" from "does not exist" for the author.
    if let Some(failure) = report.failures.iter().find(|f| f.slug == slug) {
        bail!(
            "Project '{slug}' is invalid:\n  {}",
            failure.messages().join("\n  ")
        );
    }

    let known: Vec<_> = report.entries.iter().map(|d| d.slug.as_str()).collect();
    bail!("No project '{slug}' (known: {})", known.join(", "))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use kgdev_core::{CollectionConfig, ProjectCollection};

    use super::*;

    fn report_in(dir: &Path) -> LoadReport {
        ProjectCollection::new(CollectionConfig {
            content_dir: dir.to_path_buf(),
            ..CollectionConfig::default()
        })
        .load()
        .expect("load")
    }

    #[test]
    fn test_render_normalized_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("site.md"), "---\nname: Site\nsummary: s\n---\n").expect("write");

        let json = render(&report_in(dir.path()), "site").expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["status"], "active");
        assert_eq!(value["tech"]["languages"], serde_json::json!([]));
    }

    #[test]
    fn test_render_invalid_project() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("bad.md"), "---\nname: Bad\n---\n").expect("write");

        let err = render(&report_in(dir.path()), "bad").expect_err("invalid");
        assert!(err.to_string().contains("summary: expected string"));
    }

    #[test]
    fn test_render_nested_invalid_project_by_slug() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("work")).expect("mkdir");
        fs::write(dir.path().join("work/ledger.md"), "---\nname: L\n---\n").expect("write");
        let report = report_in(dir.path());

        let err = render(&report, "work/ledger").expect_err("invalid");
        assert!(err.to_string().contains("'work/ledger' is invalid"));

        let err = render(&report, "ledger").expect_err("unknown");
        assert!(err.to_string().starts_with("No project 'ledger'"));
    }

    #[test]
    fn test_render_unknown_project() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("site.md"), "---\nname: Site\nsummary: s\n---\n").expect("write");

        let err = render(&report_in(dir.path()), "nope").expect_err("unknown");
        assert!(err.to_string().contains("known: site"));
    }
}
