//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::infra::FlatpakCli;
use crate::output::OutputContext;

/// DPI and scaling overrides for Flatpak applications
#[derive(Parser)]
#[command(
    name = "flatsize",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List installed Flatpak applications
    Apps,

    /// List the managed scaling variables and their hints
    Vars,

    /// Show current overrides for an application
    Show {
        /// Application id, e.g. org.mozilla.firefox
        app_id: String,
    },

    /// Apply scaling overrides to an application
    Set(commands::set::SetArgs),

    /// Unset all managed overrides for an application
    Reset(commands::reset::ResetArgs),

    /// Launch an application
    Run {
        /// Application id, e.g. org.mozilla.firefox
        app_id: String,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { json, quiet, no_color, command } = self;
        let ctx = OutputContext::new(no_color, quiet);
        let store = FlatpakCli::default();
        match command {
            Command::Apps => commands::apps::run(&ctx, store, json).await,
            Command::Vars => commands::vars::run(&ctx, json),
            Command::Show { app_id } => commands::show::run(&ctx, store, &app_id, json).await,
            Command::Set(args) => commands::set::run(&ctx, store, &args).await,
            Command::Reset(args) => commands::reset::run(&ctx, store, &args).await,
            Command::Run { app_id } => commands::run::run(&ctx, store, &app_id).await,
        }
    }
}
