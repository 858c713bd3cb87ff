//! Site command - print the site configuration as JSON

use color_eyre::eyre::Result;
use kgdev_core::app_config;

/// Run the site command.
pub fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(app_config())?);
    Ok(())
}
