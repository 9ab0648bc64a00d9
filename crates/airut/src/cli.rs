use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Airut CLI – announce releases to chat webhooks
#[derive(Debug, Parser)]
#[command(name = "airut", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize Airut in the current repository
    Init,

    /// Compose and send the release notification card
    Notify(NotifyArgs),
}

#[derive(Debug, Args, Default)]
pub struct NotifyArgs {
    /// The tag that was just released
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// The previously released tag (omit for a first release)
    #[arg(long, value_name = "TAG")]
    pub previous_tag: Option<String>,

    /// Path to the changelog fragment for this release
    #[arg(long, value_name = "PATH", default_value = "CHANGELOG.md")]
    pub changelog: PathBuf,

    /// Webhook URL (overrides AIRUT_WEBHOOK_URL and the config file)
    #[arg(long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Compose and print the payload without sending it
    #[arg(long)]
    pub dry_run: bool,
}
