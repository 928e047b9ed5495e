//! # cadence CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Cadence appraisal stack CLI.
///
/// Validates template drafts, prints the authorization table, and
/// lists the built-in rating scales.
#[derive(Parser, Debug)]
#[command(name = "cadence", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a template draft file (JSON or YAML).
    Validate(cadence_cli::validate::ValidateArgs),
    /// Print the operation/role authorization table.
    Roles(cadence_cli::roles::RolesArgs),
    /// List the built-in rating scales.
    Scales,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => cadence_cli::validate::run(args),
        Commands::Roles(args) => cadence_cli::roles::run(args),
        Commands::Scales => cadence_cli::scales::run(),
    }
}
