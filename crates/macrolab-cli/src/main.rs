//! macrolab CLI: render and debug g-code macro templates locally.
//!
//! Provides three commands: `render` extracts `[gcode_macro ...]` blocks
//! from a config file and renders each against sample parameters, `debug`
//! runs the built-in start/end templates and prints their intermediate
//! values, and `list` shows which blocks a config file contains.
//!
//! Nothing is sent to a printer; all rendering happens locally through
//! [`macrolab_core`].

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "macrolab",
    about = "Render and debug g-code macro templates locally — no printer required",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render macro blocks from a config file (or the built-in example)
    Render {
        /// Config file with [gcode_macro ...] sections (built-in example if omitted)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Write the rendered report to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// JSON object with parameter overrides, e.g. '{"BED_TEMP": 65}'
        #[arg(long, short)]
        params: Option<String>,

        /// JSON file with parameter overrides (applied before --params)
        #[arg(long)]
        params_file: Option<PathBuf>,
    },

    /// Run the built-in debug templates and print intermediate values
    Debug {
        /// Template file to debug instead of the built-in ones
        #[arg(long, short)]
        template: Option<PathBuf>,
    },

    /// List the macro blocks found in a config file
    List {
        /// Config file with [gcode_macro ...] sections
        #[arg(long, short)]
        file: PathBuf,

        /// Emit the block list as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Render {
            file,
            out,
            params,
            params_file,
        } => {
            commands::render::run(
                file.as_deref(),
                out.as_deref(),
                params.as_deref(),
                params_file.as_deref(),
            )?;
        }
        Commands::Debug { template } => {
            commands::debug::run(template.as_deref())?;
        }
        Commands::List { file, json } => {
            commands::list::run(&file, json)?;
        }
    }

    Ok(())
}
