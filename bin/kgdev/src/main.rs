//! kgdev CLI
//!
//! Checks and inspects the project collection of the kgdev.me site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for kgdev.
#[derive(Parser)]
#[command(
    name = "kgdev",
    version,
    about = "Project content tooling for kgdev.me"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "kgdev.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate every project file
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print one normalized project as JSON
    Show {
        /// Project slug (file path relative to the content directory, without extension)
        slug: String,
    },
    /// Print the site configuration as JSON
    Site,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    kgdev::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict } => {
            kgdev::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Show { slug } => {
            kgdev::cmd::show::run(&cli.config, &slug)?;
        }
        Commands::Site => {
            kgdev::cmd::site::run()?;
        }
    }

    Ok(())
}
