//! Nested descriptors shared by project entries.

use std::fmt;

use serde::Serialize;

use super::validator::{Choice, Descriptor, Record, Validator};

/// Where a service or component runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hosting {
    /// Hosting provider (e.g., "Fly.io").
    pub provider: String,

    /// Specific managed offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Public URL of the hosted service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Descriptor for Hosting {
    fn from_record(v: &mut Validator, record: Record<'_>) -> Option<Self> {
        let provider = v.required_string(&record, "provider");
        let service = v.optional_string(&record, "service");
        let url = v.optional_url(&record, "url");

        Some(Self {
            provider: provider?,
            service: service?,
            url: url?,
        })
    }
}

/// A source repository linked to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repo {
    /// Repository name.
    pub name: String,

    /// Repository URL.
    pub url: String,

    /// What the repository is for.
    pub role: String,

    /// Whether the repository is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl Descriptor for Repo {
    fn from_record(v: &mut Validator, record: Record<'_>) -> Option<Self> {
        let name = v.required_string(&record, "name");
        let url = v.required_url(&record, "url");
        let role = v.required_string(&record, "role");
        let private = v.optional_bool(&record, "private");

        Some(Self {
            name: name?,
            url: url?,
            role: role?,
            private: private?,
        })
    }
}

/// Kind of deployable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Frontend,
    Backend,
    Infra,
    Worker,
    Db,
    Mobile,
}

impl Choice for ComponentKind {
    const ALLOWED: &'static [&'static str] =
        &["frontend", "backend", "infra", "worker", "db", "mobile"];
    const EXPECTED: &'static str = "one of frontend|backend|infra|worker|db|mobile";

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "frontend" => Some(Self::Frontend),
            "backend" => Some(Self::Backend),
            "infra" => Some(Self::Infra),
            "worker" => Some(Self::Worker),
            "db" => Some(Self::Db),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Infra => "infra",
            Self::Worker => "worker",
            Self::Db => "db",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One deployable unit inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ComponentKind,

    /// Primary implementation language.
    pub language: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    /// Repository name or path within a monorepo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting: Option<Hosting>,

    pub notes: Vec<String>,
}

impl Descriptor for Component {
    fn from_record(v: &mut Validator, record: Record<'_>) -> Option<Self> {
        let name = v.required_string(&record, "name");
        let kind = v.required_choice(&record, "type");
        let language = v.required_string(&record, "language");
        let framework = v.optional_string(&record, "framework");
        let repo = v.optional_string(&record, "repo");
        let github = v.optional_url(&record, "github");
        let package_manager = v.optional_string(&record, "packageManager");
        let hosting = v.optional_descriptor(&record, "hosting");
        let notes = v.string_list(&record, "notes");

        Some(Self {
            name: name?,
            kind: kind?,
            language: language?,
            framework: framework?,
            repo: repo?,
            github: github?,
            package_manager: package_manager?,
            hosting: hosting?,
            notes: notes?,
        })
    }
}
