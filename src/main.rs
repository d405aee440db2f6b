mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weektaak")]
#[command(about = "Publish the weekly cleaning roster as JSON and personal calendars")]
struct Cli {
    /// Config file (defaults to ./weektaak.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log what is being read and written
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate every personal .ics calendar and the admin calendar
    Calendars {
        /// Roster file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Personal calendar path with a `{}` placeholder for the name
        #[arg(short, long)]
        output: Option<String>,

        /// Admin calendar path
        #[arg(long, conflicts_with = "no_admin")]
        admin: Option<PathBuf>,

        /// Skip the admin calendar
        #[arg(long)]
        no_admin: bool,
    },
    /// Write the JSON lookup used by the website
    Json {
        /// Roster file
        #[arg(long)]
        data: Option<PathBuf>,

        /// JSON output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the calendars, then the JSON lookup
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Calendars {
            data,
            output,
            admin,
            no_admin,
        } => {
            if let Some(data) = data {
                cfg.data_path = data;
            }
            if let Some(output) = output {
                cfg.ics_filename_format = output;
            }
            if admin.is_some() || no_admin {
                cfg.admin = admin;
            }
            commands::calendars::run(&cfg)
        }
        Commands::Json { data, output } => {
            if let Some(data) = data {
                cfg.data_path = data;
            }
            if let Some(output) = output {
                cfg.json_path = output;
            }
            commands::json::run(&cfg)
        }
        Commands::All => commands::all::run(&cfg),
    }
}

/// RUST_LOG wins; otherwise warnings only, or debug with --verbose.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
