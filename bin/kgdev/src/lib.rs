//! kgdev CLI Library
//!
//! Commands for checking and inspecting the kgdev.me project collection.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, show, site)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use kgdev::cmd;
//!
//! // Validate every project file
//! cmd::check::run(Path::new("kgdev.toml"), false).unwrap();
//! ```

pub mod cmd;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
