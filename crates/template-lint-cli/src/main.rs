//! template-lint CLI tool.
//!
//! Usage:
//! ```bash
//! template-lint check [OPTIONS] <AST>...
//! template-lint validate-config
//! template-lint list-rules
//! template-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use template_lint_core::Plugin;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Plugins compiled into this binary.
pub const PLUGINS: &[Plugin] = &[template_lint_denylist::PLUGIN];

/// Template linter with attribute denylist support
#[derive(Parser)]
#[command(name = "template-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint parsed templates
    Check {
        /// Template AST files (JSON emitted by the template parser)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate the configuration and print the normalized rule options
    ValidateConfig,

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;
    let source = config_resolver::resolve(&cwd, cli.config.as_deref());

    match cli.command {
        Commands::Check { paths, format } => commands::check::run(&paths, format, &source),
        Commands::ValidateConfig => commands::validate_config::run(&source),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
