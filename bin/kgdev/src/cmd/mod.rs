//! CLI command implementations.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use kgdev_core::{Config, LoadReport, ProjectCollection};

pub mod check;
pub mod show;
pub mod site;

/// Load configuration and the project collection it points at.
fn load_collection(config_path: &Path) -> Result<LoadReport> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let collection = ProjectCollection::new(config.collection);

    collection.load().wrap_err_with(|| {
        format!(
            "Failed to load projects from {}",
            collection.content_dir().display()
        )
    })
}
