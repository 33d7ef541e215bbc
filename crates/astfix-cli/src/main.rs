//! astfix CLI tool.
//!
//! Usage:
//! ```bash
//! astfix lint [OPTIONS] [PATH]
//! astfix format <FILE> [--out <PATH>]
//! astfix generate <AST_JSON> [--out <PATH>]
//! astfix ast <FILE> [--json]
//! astfix list-rules
//! astfix init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

use commands::Settings;

/// Lints, fixes and regenerates TypeScript through a generic syntax tree
#[derive(Parser)]
#[command(name = "astfix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every visited node and enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ASTFIX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run check rules over a file or directory
    Lint {
        /// File or directory to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude glob patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Apply fix rules to a file and print the regenerated source
    Format {
        /// TypeScript file to format
        file: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Regenerate source from a JSON-serialized tree
    Generate {
        /// JSON file produced by `astfix ast --json`
        ast: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the generic tree of a file
    Ast {
        /// TypeScript file to parse
        file: PathBuf,

        /// Print JSON instead of an indented outline
        #[arg(long)]
        json: bool,
    },

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
    /// Source excerpts with the offending node highlighted.
    Pretty,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings {
        debug: cli.debug,
        config: cli.config,
    };

    match cli.command {
        Commands::Lint {
            path,
            format,
            exclude,
        } => commands::lint::run(&path, format, &exclude, &settings),
        Commands::Format { file, out } => commands::format::run(&file, out.as_deref(), &settings),
        Commands::Generate { ast, out } => {
            commands::generate::run(&ast, out.as_deref(), &settings)
        }
        Commands::Ast { file, json } => commands::ast::run(&file, json),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
