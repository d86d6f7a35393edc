//! promptline command-line entry point.
//!
//! # Usage
//!
//! ```text
//! promptline [--config <PATH>] [--no-color] config toggle [SEGMENT] [--list] [--sort]
//! promptline [--config <PATH>] [--no-color] config probe <SEGMENT>
//! ```
//!
//! # Environment variables
//!
//! | Variable           | Description                                   |
//! |--------------------|-----------------------------------------------|
//! | `PROMPTLINE_THEME` | Theme document path when `--config` is absent |
//! | `RUST_LOG`         | Log filter for stderr diagnostics (`warn`)    |
//!
//! # Exit status
//!
//! `0` on success and when printing help, `1` when the theme cannot be read,
//! parsed, or written, or the segment is not in the theme, and `2` when the
//! segment argument is not a known segment type.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Args, CommandFactory, Parser, Subcommand};
use promptline_core::SegmentType;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use promptline_cli::application::ports::StatusSink;
use promptline_cli::application::probe_segment::ProbeSegmentUseCase;
use promptline_cli::application::toggle_segment::{
    ToggleOutcome, ToggleRequest, ToggleSegmentUseCase,
};
use promptline_cli::infrastructure::environment::OsEnvironment;
use promptline_cli::infrastructure::storage::config::FileConfigStore;
use promptline_cli::infrastructure::terminal::{stdout_supports_color, TerminalStatus};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Prompt theme maintenance.
#[derive(Debug, Parser)]
#[command(
    name = "promptline",
    about = "Multi-segment shell prompt theming",
    version
)]
struct Cli {
    /// Theme configuration file (YAML, TOML, or JSON).
    #[arg(long, global = true, env = "PROMPTLINE_THEME")]
    config: Option<PathBuf>,

    /// Disable ANSI colors in status output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the theme configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Enable/disable segment
    ///
    /// Flips the persisted enabled flag of the first segment with the given
    /// type and writes the theme back.
    ///
    /// Example usage:
    ///
    /// > promptline config toggle aws
    ///
    /// > promptline config toggle --list --sort
    Toggle(ToggleArgs),

    /// Evaluate a segment against the current environment
    Probe {
        /// Segment type to probe
        #[arg(value_parser = segment_type_parser())]
        segment: SegmentType,
    },
}

#[derive(Debug, Args)]
struct ToggleArgs {
    /// Segment type to enable or disable
    #[arg(value_parser = segment_type_parser())]
    segment: Option<SegmentType>,

    /// List segments status
    #[arg(short, long)]
    list: bool,

    /// Order the list by status (ON first), then by type
    #[arg(short, long)]
    sort: bool,
}

/// Accepts only known segment type names; clap lists them on rejection.
fn segment_type_parser() -> impl TypedValueParser<Value = SegmentType> {
    PossibleValuesParser::new(SegmentType::names()).try_map(|name| name.parse::<SegmentType>())
}

impl Cli {
    fn config_store(&self) -> anyhow::Result<FileConfigStore> {
        let path = self
            .config
            .clone()
            .context("no theme configured: set PROMPTLINE_THEME or pass --config <PATH>")?;
        Ok(FileConfigStore::new(path))
    }
}

fn print_toggle_help() -> anyhow::Result<()> {
    let mut command = Cli::command();
    command.build();
    if let Some(toggle) = command
        .find_subcommand_mut("config")
        .and_then(|config| config.find_subcommand_mut("toggle"))
    {
        toggle.print_help()?;
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so status lines on stdout stay clean.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let color = stdout_supports_color(cli.no_color);
    let mut status = TerminalStatus::new(io::stdout().lock(), color);
    run(&cli, &mut status)
}

/// Dispatches a parsed command line.  Any error propagates to `main`, which
/// reports it on stderr and exits with status 1.
fn run(cli: &Cli, status: &mut dyn StatusSink) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Config {
            command: ConfigCommands::Toggle(args),
        } => {
            let request = ToggleRequest::from_args(args.segment, args.list, args.sort);
            debug!(?request, "config toggle");
            if request == ToggleRequest::Help {
                return print_toggle_help();
            }
            let store = cli.config_store()?;
            match ToggleSegmentUseCase::new(&store).execute(request, status)? {
                ToggleOutcome::HelpRequested => print_toggle_help()?,
                ToggleOutcome::Listed { .. } | ToggleOutcome::Toggled { .. } => {}
            }
        }
        Commands::Config {
            command: ConfigCommands::Probe { segment },
        } => {
            let store = cli.config_store()?;
            ProbeSegmentUseCase::new(&store, Arc::new(OsEnvironment::new()))
                .execute(*segment, status)?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
