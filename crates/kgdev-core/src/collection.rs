//! Project collection loading.
//!
//! Walks the content directory, parses each file's frontmatter and validates
//! it as a [`ProjectEntry`]. Broken files are collected as failures so that a
//! single run reports every problem.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::CollectionConfig,
    error::{CoreError, Result, SchemaError},
    frontmatter::parse_frontmatter,
    schema::{ProjectEntry, validate_all},
};

/// A validated project together with its source.
#[derive(Debug, Clone)]
pub struct ProjectDocument {
    /// Path relative to the content directory, without extension.
    pub slug: String,

    /// Source file path.
    pub path: PathBuf,

    pub entry: ProjectEntry,

    /// Content after the frontmatter.
    pub body: String,
}

/// Why a content file was rejected.
#[derive(Debug)]
pub enum FailureKind {
    /// The file could not be read or its frontmatter could not be parsed.
    Unreadable(CoreError),

    /// The frontmatter does not match the project schema.
    Invalid(Vec<SchemaError>),
}

/// A content file that did not produce a project.
#[derive(Debug)]
pub struct EntryFailure {
    /// Slug the file would have had, as for [`ProjectDocument::slug`].
    pub slug: String,

    pub path: PathBuf,
    pub kind: FailureKind,
}

impl EntryFailure {
    /// Human-readable problems, one per line of output.
    pub fn messages(&self) -> Vec<String> {
        match &self.kind {
            FailureKind::Unreadable(err) => vec![err.to_string()],
            FailureKind::Invalid(errors) => errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Outcome of loading a collection.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Valid projects, sorted by slug.
    pub entries: Vec<ProjectDocument>,

    /// Rejected files, sorted by path.
    pub failures: Vec<EntryFailure>,
}

impl LoadReport {
    /// Whether every content file validated.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Find a project by slug.
    pub fn get(&self, slug: &str) -> Option<&ProjectDocument> {
        self.entries.iter().find(|doc| doc.slug == slug)
    }
}

/// Loads project content files from a directory.
#[derive(Debug, Clone)]
pub struct ProjectCollection {
    config: CollectionConfig,
}

impl ProjectCollection {
    /// Create a collection loader.
    #[must_use]
    pub fn new(config: CollectionConfig) -> Self {
        Self { config }
    }

    /// Directory this collection reads from.
    pub fn content_dir(&self) -> &Path {
        &self.config.content_dir
    }

    /// Load and validate every project file.
    pub fn load(&self) -> Result<LoadReport> {
        let dir = self.content_dir();
        if !dir.is_dir() {
            return Err(CoreError::collection(dir, "content directory not found"));
        }

        info!(dir = %dir.display(), "loading project collection");

        let files = self.find_content_files()?;
        debug!(count = files.len(), "found content files");

        let results: Vec<_> = files
            .par_iter()
            .map(|path| self.load_file(path))
            .collect();

        let mut report = LoadReport::default();
        for result in results {
            match result {
                Ok(doc) => {
                    debug!(slug = %doc.slug, "loaded project");
                    report.entries.push(doc);
                }
                Err(failure) => {
                    warn!(
                        path = %failure.path.display(),
                        problems = failure.messages().len(),
                        "invalid project"
                    );
                    report.failures.push(failure);
                }
            }
        }

        report.entries.sort_by(|a, b| a.slug.cmp(&b.slug));
        report.failures.sort_by(|a, b| a.path.cmp(&b.path));

        info!(
            projects = report.entries.len(),
            failures = report.failures.len(),
            "project collection loaded"
        );

        Ok(report)
    }

    /// Find content files, skipping hidden files and directories.
    fn find_content_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(self.content_dir())
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry?;
            if entry.file_type().is_file() && self.config.is_content_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn load_file(&self, path: &Path) -> std::result::Result<ProjectDocument, EntryFailure> {
        let slug = slug_for(self.content_dir(), path);
        let unreadable = |err: CoreError| EntryFailure {
            slug: slug.clone(),
            path: path.to_path_buf(),
            kind: FailureKind::Unreadable(err),
        };

        let content = fs::read_to_string(path).map_err(|e| unreadable(e.into()))?;
        let (raw, body) = parse_frontmatter(&content, path).map_err(unreadable)?;

        let entry = validate_all(&raw).map_err(|errors| EntryFailure {
            slug: slug.clone(),
            path: path.to_path_buf(),
            kind: FailureKind::Invalid(errors),
        })?;

        Ok(ProjectDocument {
            slug,
            path: path.to_path_buf(),
            entry,
            body,
        })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Slug from a path relative to the content directory, `/`-separated.
fn slug_for(content_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(content_dir).unwrap_or(path);
    let without_ext = relative.with_extension("");

    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
