//! Project content schema.
//!
//! [`validate`] turns a raw record (typically parsed frontmatter) into a
//! normalized [`ProjectEntry`]. Absent optional fields take their defaults,
//! unknown keys are dropped, and an explicit `null` counts as a wrong type.
//!
//! ```
//! use kgdev_core::schema::{ProjectStatus, validate};
//!
//! let raw = serde_yaml::from_str("name: X\nsummary: Y").unwrap();
//! let entry = validate(&raw).unwrap();
//! assert_eq!(entry.status, ProjectStatus::Active);
//! assert!(entry.tech.languages.is_empty());
//! ```

mod descriptor;
mod path;
mod project;
pub mod url;
mod validator;

pub use descriptor::{Component, ComponentKind, Hosting, Repo};
pub use path::FieldPath;
pub use project::{Images, ProjectEntry, ProjectStatus, Tech};
use serde_yaml::Value;
pub use validator::Choice;
use validator::{Descriptor, Validator};

use crate::error::SchemaError;

/// Validate a raw record, stopping at the first violation in field order.
pub fn validate(raw: &Value) -> Result<ProjectEntry, SchemaError> {
    validate_all(raw).map_err(|errors| {
        errors
            .into_iter()
            .next()
            .unwrap_or(SchemaError::MissingOrInvalidField {
                path: FieldPath::root(),
                expected: "object",
                found: "invalid record",
            })
    })
}

/// Validate a raw record, collecting every violation in field order.
pub fn validate_all(raw: &Value) -> Result<ProjectEntry, Vec<SchemaError>> {
    let mut v = Validator::new();
    let entry = v
        .record(raw, FieldPath::root())
        .and_then(|record| ProjectEntry::from_record(&mut v, record));
    v.finish(entry)
}
