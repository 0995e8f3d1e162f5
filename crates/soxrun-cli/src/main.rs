//! soxrun CLI - apply sox recipes to selected audio files
//!
//! Each operation writes a sibling file named after the input with a tag
//! inserted before the extension (`song.wav` -> `song_n.wav`).

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use soxrun_cli::commands;
use soxrun_cli::config::{self, Overrides};
use soxrun_cli::logging;

/// soxrun - sox recipes for file-manager selections
#[derive(Parser)]
#[command(name = "soxrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "SOXRUN_CONFIG")]
    config: Option<PathBuf>,

    /// sox executable name or path
    #[arg(long, global = true, env = "SOXRUN_SOX")]
    sox: Option<String>,

    /// Shell used to run command lines
    #[arg(long, global = true, env = "SOXRUN_SHELL")]
    shell: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an operation to the selected files
    Run {
        /// Operation name or alias (see `soxrun list`)
        operation: String,

        /// Files to process, in order
        files: Vec<PathBuf>,

        /// File listing selected paths, one per line; truncated when done
        #[arg(short = 'f', long)]
        selection_file: Option<PathBuf>,

        /// Print command lines without running them
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Let sox write to the terminal instead of capturing its output
        #[arg(long)]
        no_capture: bool,

        /// Exit without waiting for dispatched commands
        #[arg(long)]
        no_wait: bool,
    },

    /// List available operations
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Check system dependencies and configuration
    Doctor,

    /// Print the effective configuration
    Config,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            sox: self.sox.clone(),
            shell: self.shell.clone(),
            ..Default::default()
        };
        if let Commands::Run {
            dry_run,
            no_capture,
            no_wait,
            ..
        } = self.command
        {
            overrides.dry_run = dry_run;
            overrides.no_capture = no_capture;
            overrides.no_wait = no_wait;
        }
        overrides
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = config::resolve(cli.config.as_deref(), &cli.overrides())
        .map_err(anyhow::Error::from)
        .and_then(|loaded| match &cli.command {
            Commands::Run {
                operation,
                files,
                selection_file,
                ..
            } => commands::run::run(
                operation,
                files,
                selection_file.as_deref(),
                &loaded.config,
            ),
            Commands::List { json } => commands::list::run(*json),
            Commands::Doctor => commands::doctor::run(&loaded),
            Commands::Config => commands::show_config::run(&loaded),
        });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
