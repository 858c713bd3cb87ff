//! The top-level project entry.

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;

use super::{
    descriptor::{Component, Hosting, Repo},
    validator::{Choice, Descriptor, Record, Validator},
};
use crate::error::Result;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Paused,
    Archived,
}

impl Choice for ProjectStatus {
    const ALLOWED: &'static [&'static str] = &["active", "paused", "archived"];
    const EXPECTED: &'static str = "one of active|paused|archived";

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Languages and frameworks used across a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tech {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
}

impl Descriptor for Tech {
    fn from_record(v: &mut Validator, record: Record<'_>) -> Option<Self> {
        let languages = v.string_list(&record, "languages");
        let frameworks = v.string_list(&record, "frameworks");

        Some(Self {
            languages: languages?,
            frameworks: frameworks?,
        })
    }
}

/// Image paths shown alongside a project. Not checked as URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Images {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

impl Descriptor for Images {
    fn from_record(v: &mut Validator, record: Record<'_>) -> Option<Self> {
        let logo = v.optional_string(&record, "logo");
        let architecture = v.optional_string(&record, "architecture");

        Some(Self {
            logo: logo?,
            architecture: architecture?,
        })
    }
}

/// A validated, normalized portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    /// Project name (required).
    pub name: String,

    /// One-line summary (required).
    pub summary: String,

    /// Public website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Lifecycle status, `active` when not given.
    pub status: ProjectStatus,

    pub tags: Vec<String>,

    pub tech: Tech,

    /// Project-level hosting.
    pub hosting: Vec<Hosting>,

    pub repos: Vec<Repo>,

    pub components: Vec<Component>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
}

impl Descriptor for ProjectEntry {
    fn from_record(v: &mut Validator, record: Record<'_>) -> Option<Self> {
        let name = v.required_string(&record, "name");
        let summary = v.required_string(&record, "summary");
        let website = v.optional_url(&record, "website");
        let status = v.choice_or(&record, "status", ProjectStatus::default());
        let tags = v.string_list(&record, "tags");
        let tech = v.descriptor_or_default(&record, "tech");
        let hosting = v.descriptor_list(&record, "hosting");
        let repos = v.descriptor_list(&record, "repos");
        let components = v.descriptor_list(&record, "components");
        let images = v.optional_descriptor(&record, "images");

        Some(Self {
            name: name?,
            summary: summary?,
            website: website?,
            status: status?,
            tags: tags?,
            tech: tech?,
            hosting: hosting?,
            repos: repos?,
            components: components?,
            images: images?,
        })
    }
}

impl ProjectEntry {
    /// Convert back into a raw record using the same keys validation reads.
    pub fn to_raw(&self) -> Result<Value> {
        Ok(serde_yaml::to_value(self)?)
    }

    /// Distinct languages across the project and its components, in first-seen order.
    pub fn all_languages(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let from_tech = self.tech.languages.iter().map(String::as_str);
        let from_components = self.components.iter().map(|c| c.language.as_str());

        for language in from_tech.chain(from_components) {
            if !seen.contains(&language) {
                seen.push(language);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ComponentKind;

    #[test]
    fn test_status_default_is_active() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
        assert_eq!(ProjectStatus::default().to_string(), "active");
    }

    #[test]
    fn test_to_raw_uses_wire_names() {
        let entry = ProjectEntry {
            name: "kgdev.me".to_string(),
            summary: "Personal site".to_string(),
            website: None,
            status: ProjectStatus::Paused,
            tags: vec!["blog".to_string()],
            tech: Tech::default(),
            hosting: Vec::new(),
            repos: Vec::new(),
            components: vec![Component {
                name: "site".to_string(),
                kind: ComponentKind::Frontend,
                language: "TypeScript".to_string(),
                framework: Some("Astro".to_string()),
                repo: None,
                github: None,
                package_manager: Some("pnpm".to_string()),
                hosting: None,
                notes: Vec::new(),
            }],
            images: None,
        };

        let raw = entry.to_raw().expect("serialize");
        assert_eq!(raw["status"], Value::from("paused"));
        assert_eq!(raw["components"][0]["type"], Value::from("frontend"));
        assert_eq!(raw["components"][0]["packageManager"], Value::from("pnpm"));
        assert!(raw.get("website").is_none());
        assert!(raw["components"][0].get("repo").is_none());
    }

    #[test]
    fn test_all_languages_deduplicates() {
        let mut entry = ProjectEntry {
            name: "x".to_string(),
            summary: "y".to_string(),
            website: None,
            status: ProjectStatus::Active,
            tags: Vec::new(),
            tech: Tech {
                languages: vec!["Elixir".to_string(), "Elm".to_string()],
                frameworks: Vec::new(),
            },
            hosting: Vec::new(),
            repos: Vec::new(),
            components: Vec::new(),
            images: None,
        };
        entry.components.push(Component {
            name: "api".to_string(),
            kind: ComponentKind::Backend,
            language: "Elixir".to_string(),
            framework: None,
            repo: None,
            github: None,
            package_manager: None,
            hosting: None,
            notes: Vec::new(),
        });
        entry.components.push(Component {
            name: "infra".to_string(),
            kind: ComponentKind::Infra,
            language: "HCL".to_string(),
            framework: None,
            repo: None,
            github: None,
            package_manager: None,
            hosting: None,
            notes: Vec::new(),
        });

        assert_eq!(entry.all_languages(), vec!["Elixir", "Elm", "HCL"]);
    }
}
