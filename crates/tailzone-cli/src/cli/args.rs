//! Command-line argument definitions using clap.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate a BIND zone file from a Tailscale device inventory
///
/// Fetches every device of a tailnet and writes one address record per
/// device to `db.<domain>`, so a private DNS server can resolve them.
///
/// Create an API key at: https://login.tailscale.com/admin/settings/keys
#[derive(Parser, Debug)]
#[command(name = "tailzone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tailscale API key (or set TS_KEY env var)
    #[arg(short = 'k', long = "key", env = "TS_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Tailnet name, or "-" for the key's default tailnet (or set TAILNET env var)
    #[arg(short, long, env = "TAILNET", global = true)]
    pub tailnet: Option<String>,

    /// Domain name for the zone file (or set DOMAIN_NAME env var)
    #[arg(short, long, env = "DOMAIN_NAME", global = true)]
    pub domain: Option<String>,

    /// Config file to use instead of the platform default
    #[arg(long, env = "TAILZONE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch devices and write the zone file (the default)
    Generate(GenerateArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Generate command
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Write the zone here instead of <output_dir>/db.<domain>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the zone to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Always use serial YYYYMMDD01 instead of bumping the previous one
    #[arg(long)]
    pub fixed_serial: bool,

    /// Generate the zone as of this date (YYYY-MM-DD) instead of today
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// HTTP timeout for the inventory request, in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Tailscale API base URL
    #[arg(long, env = "TAILZONE_API_URL", hide = true)]
    pub api_url: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show {
        /// Print as JSON (API key still masked)
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// Key to set (api_key, tailnet, domain, output_dir)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
