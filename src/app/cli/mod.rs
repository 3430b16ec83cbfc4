//! CLI Adapter.

mod search;
mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::config::ConfigOverrides;
use crate::app::logging::init_tracing;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "wavecheck")]
#[command(version)]
#[command(
    about = "Look up a tester's restaurant visits and their instructions",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Config file (defaults to ./wavecheck.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Server the workbook and text bank are fetched from
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,
    /// Wave label to keep
    #[arg(long, global = true, value_name = "LABEL")]
    wave: Option<String>,
}

impl SourceArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides { base_url: self.base_url.clone(), wave: self.wave.clone() }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the visits assigned to a tester
    #[clap(visible_alias = "s")]
    Search {
        /// Full name or part of it
        name: String,
        /// Print the results-list markup
        #[arg(long)]
        html: bool,
    },
    /// Print the instruction for one visit
    Show {
        /// Full name or part of it
        name: String,
        /// 1-based position in the result list
        #[arg(short, long)]
        pick: Option<usize>,
        /// Print the detail-panel markup
        #[arg(long)]
        html: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.source.config.as_deref();
    let overrides = cli.source.overrides();

    let result: Result<(), AppError> = match cli.command {
        Commands::Search { name, html } => search::run_search(config, &overrides, &name, html),
        Commands::Show { name, pick, html } => {
            show::run_show(config, &overrides, &name, pick, html)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
