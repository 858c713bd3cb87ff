//! kgdev Core Library
//!
//! Project content schema, site configuration, and content collection loading
//! for the kgdev.me portfolio.

pub mod collection;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod schema;
pub mod site;

pub use collection::{EntryFailure, FailureKind, LoadReport, ProjectCollection, ProjectDocument};
pub use config::{CollectionConfig, Config};
pub use error::{CoreError, Result, SchemaError};
pub use schema::{ProjectEntry, validate, validate_all};
pub use site::{APP_CONFIG, SiteConfig, app_config};
