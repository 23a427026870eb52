//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use slotlint::output::OutputMode;

/// slotlint - Find dangling item references in slot filters
#[derive(Parser, Debug)]
#[command(
    name = "slotlint",
    version,
    about = "Find dangling item references in slot filters",
    long_about = "Walk every slot filter of an item catalog and report referenced IDs that do not exist.\n\n\
                  Invalid IDs are grouped by the pass that found them: weapons, weapon attachments,\n\
                  equipment, equipment attachments, and everything else."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a catalog file or directory for invalid references
    Check {
        /// Catalog JSON file, or a directory of JSON files
        catalog: PathBuf,

        /// Config file (defaults to ./slotlint.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail when any invalid reference is found
        #[arg(long)]
        strict: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check {
            catalog,
            config,
            strict,
        }) => commands::check(&catalog, config.as_deref(), strict, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": slotlint::VERSION
                    })
                );
            } else {
                println!("slotlint v{}", slotlint::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": slotlint::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("slotlint v{}", slotlint::VERSION);
                println!("\nRun 'slotlint --help' for usage");
                println!("Run 'slotlint check <catalog>' to check a catalog");
            }
            Ok(())
        },
    }
}
