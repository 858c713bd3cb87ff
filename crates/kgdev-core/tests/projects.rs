//! End-to-end tests for project content.
//!
//! These tests load the fixture collection and check validation results as a
//! content author would see them.

use std::path::{Path, PathBuf};

use kgdev_core::{
    CollectionConfig, FailureKind, ProjectCollection, SchemaError,
    schema::{ComponentKind, ProjectStatus, validate},
};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/projects")
}

fn load_fixtures() -> kgdev_core::LoadReport {
    ProjectCollection::new(CollectionConfig {
        content_dir: fixtures(),
        ..CollectionConfig::default()
    })
    .load()
    .expect("fixtures load")
}

#[test]
fn test_fixture_collection_loads() {
    let report = load_fixtures();

    let slugs: Vec<_> = report.entries.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["kgdev-me", "ledger"]);
    assert_eq!(report.failures.len(), 1);
}

#[test]
fn test_yaml_project_is_normalized() {
    let report = load_fixtures();
    let doc = report.get("kgdev-me").expect("kgdev-me");
    let entry = &doc.entry;

    assert_eq!(entry.name, "KGDEV.me");
    assert_eq!(entry.status, ProjectStatus::Active);
    assert_eq!(entry.tech.frameworks, vec!["Astro", "Tailwind"]);
    assert_eq!(entry.hosting[0].service.as_deref(), Some("Pages"));
    assert_eq!(entry.repos[0].private, None);
    assert_eq!(entry.components[0].kind, ComponentKind::Frontend);
    assert_eq!(
        entry.images.as_ref().and_then(|i| i.logo.as_deref()),
        Some("/images/projects/kgdev/logo.svg")
    );
    assert_eq!(doc.body, "The site you are reading.\n");
}

#[test]
fn test_toml_project_is_normalized() {
    let report = load_fixtures();
    let entry = &report.get("ledger").expect("ledger").entry;

    assert_eq!(entry.status, ProjectStatus::Paused);
    assert_eq!(entry.tech.languages, vec!["Elixir", "Elm"]);
    assert!(entry.tech.frameworks.is_empty());
    assert_eq!(entry.repos[0].private, Some(true));
    assert!(entry.website.is_none());

    let kinds: Vec<_> = entry.components.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ComponentKind::Backend,
            ComponentKind::Worker,
            ComponentKind::Frontend
        ]
    );
    assert!(entry.components.iter().all(|c| c.notes.is_empty()));
    assert_eq!(entry.all_languages(), vec!["Elixir", "Elm"]);
}

#[test]
fn test_broken_project_reports_every_field() {
    let report = load_fixtures();
    let failure = &report.failures[0];
    assert!(failure.path.ends_with("broken.md"));

    let FailureKind::Invalid(errors) = &failure.kind else {
        panic!("expected schema errors, got {:?}", failure.kind);
    };
    let paths: Vec<_> = errors.iter().map(|e| e.path().to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "website",
            "repos[0].role",
            "components[0].type",
            "components[1].language",
        ]
    );
    assert!(matches!(errors[0], SchemaError::InvalidUrl { .. }));
    assert!(matches!(errors[2], SchemaError::InvalidEnumValue { .. }));
}

#[test]
fn test_loaded_entries_revalidate_identically() {
    let report = load_fixtures();
    for doc in &report.entries {
        let raw = doc.entry.to_raw().expect("serialize");
        let again = validate(&raw).expect("revalidate");
        assert_eq!(again, doc.entry, "{} changed on revalidation", doc.slug);
    }
}

#[test]
fn test_scenario_records() {
    let minimal = serde_yaml::from_str("{name: X, summary: Y}").expect("yaml");
    let entry = validate(&minimal).expect("scenario A");
    assert_eq!(entry.status, ProjectStatus::Active);
    assert!(entry.tags.is_empty() && entry.hosting.is_empty() && entry.repos.is_empty());
    assert!(entry.components.is_empty());
    assert!(entry.tech.languages.is_empty() && entry.tech.frameworks.is_empty());

    let bad_kind = serde_yaml::from_str(
        "{name: X, summary: Y, components: [{name: api, type: server}]}",
    )
    .expect("yaml");
    let err = validate(&bad_kind).expect_err("scenario B");
    assert_eq!(err.path().to_string(), "components[0].type");
    assert!(matches!(err, SchemaError::InvalidEnumValue { ref value, .. } if value == "server"));

    let ftp = serde_yaml::from_str("{name: X, summary: Y, website: 'ftp://x'}").expect("yaml");
    assert!(validate(&ftp).is_ok(), "scenario C: ftp URLs with a host are accepted");
}
