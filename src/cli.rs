use clap::{Parser, Subcommand, ValueEnum};
use pygrid_cli::{AppName, PayloadEncoding, Provider, StatusApp};

/// PyGrid CLI - deploy and inspect PyGrid nodes, networks and workers
#[derive(Parser, Debug)]
#[command(name = "pygrid")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Every run writes the collected configuration to ~/.pygrid/cli/<output-file>."
)]
pub struct Cli {
    /// Deployment API base URL (falls back to PYGRID_API_URL, then the settings file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Name of the configuration file written under ~/.pygrid/cli (a bare file name)
    #[arg(long, global = true)]
    pub output_file: Option<String>,

    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure a deployment interactively and submit it
    Deploy {
        /// Cloud provider (will prompt if not specified)
        #[arg(long, value_enum, ignore_case = true)]
        provider: Option<Provider>,

        /// Application to deploy (will prompt if not specified)
        #[arg(long, value_enum, ignore_case = true)]
        app: Option<AppName>,

        /// Shape of the request body sent to the API
        #[arg(long, value_enum, ignore_case = true)]
        payload: Option<PayloadEncoding>,

        /// Submit without the final confirmation
        #[arg(short, long)]
        yes: bool,

        /// Show the configuration without submitting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show deployed nodes or networks
    Status {
        /// Application kind (will prompt if not specified)
        #[arg(long, value_enum, ignore_case = true)]
        app: Option<StatusApp>,

        /// Instance id; lists every instance when omitted
        #[arg(long)]
        id: Option<u64>,
    },
}
