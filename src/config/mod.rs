pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::AuditMode;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "brick-audit")]
#[command(about = "Audits drawer occupancy and condition mixing in a parts inventory")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = "auditor.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Gaps,
    Conditions,
    All,
}

#[cfg(feature = "cli")]
impl From<ModeArg> for AuditMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Gaps => AuditMode::Gaps,
            ModeArg::Conditions => AuditMode::Conditions,
            ModeArg::All => AuditMode::All,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the gap audit and/or condition guard on the inventory export
    Audit {
        #[arg(long, value_enum, default_value_t = ModeArg::All)]
        mode: ModeArg,

        /// Profile to audit instead of the configured one
        #[arg(long)]
        profile: Option<String>,

        /// Override report format from config (text or json)
        #[arg(long)]
        format: Option<String>,
    },

    /// Manage category profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Add a color to the color reference CSV
    AddColor {
        #[arg(long)]
        bricklink_id: u32,
        #[arg(long)]
        bricklink_name: String,
        #[arg(long)]
        lego_name: String,
        #[arg(long)]
        lego_id: u32,
        #[arg(long)]
        category: String,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum ProfileAction {
    /// List saved profiles
    List,
    /// Print a profile's categories as JSON
    Show { name: Option<String> },
    /// Save the default categories under a profile name
    Init { name: Option<String> },
}
