//! CLI for the chatanalytics page-view beacon.

mod commands;

use anyhow::Result;
use beacon_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_classify, run_completions, run_config, run_send};

/// Top-level CLI for the page-view beacon.
#[derive(Debug, Parser)]
#[command(name = "beacon")]
#[command(about = "Classify page locations and send chatanalytics page-view events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the logical path and event URL reported for a location.
    Classify {
        /// Full location href (http(s):, file: or blob:).
        href: String,
    },

    /// Build an event for a location and send it.
    Send {
        /// Full location href (http(s):, file: or blob:).
        href: String,

        /// Event name.
        #[arg(long, default_value = "pageview", value_name = "NAME")]
        event: String,

        /// Print the JSON body instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the config file path and effective configuration.
    Config,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Classify { href } => run_classify(&href)?,
            CliCommand::Send {
                href,
                event,
                dry_run,
            } => {
                // A dry run never touches the config file.
                let cfg = if dry_run {
                    None
                } else {
                    let cfg = config::load_or_init()?;
                    tracing::debug!("loaded config: {:?}", cfg);
                    Some(cfg)
                };
                run_send(cfg.as_ref(), &href, &event).await?;
            }
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
