//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pipsync - reconcile declared pip requirements against installed packages.
#[derive(Debug, Parser)]
#[command(name = "pipsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the requirements file (default /etc/odoo/requirements.txt)
    #[arg(short, long, global = true, env = "PIPSYNC_REQUIREMENTS")]
    pub requirements: Option<PathBuf>,

    /// Pip command to invoke, e.g. "pip3" or "python3 -m pip"
    #[arg(long, global = true, env = "PIPSYNC_PIP")]
    pub pip: Option<String>,

    /// Show verbose output, including pip's own output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install missing packages (default if no command specified)
    Sync(SyncArgs),

    /// Report missing packages without installing anything
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SyncArgs {
    /// Install all missing packages in a single pip invocation
    #[arg(long)]
    pub batch: bool,

    /// Show what would be installed without installing
    #[arg(long)]
    pub dry_run: bool,

    /// Install without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Never prompt; assume the default answer
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
