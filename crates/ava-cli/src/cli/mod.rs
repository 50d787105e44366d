use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

use ava_config::GeneralConfig;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ava` binary.
#[derive(Debug, Parser)]
#[command(name = "ava", version, about = "AVA - learning platform client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `general.format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server execution: read the session from the AVA_SESSION_COOKIE header
    /// value and call the internal API address
    #[arg(long, global = true)]
    pub server: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// An explicit `--format` wins over the configured default.
    #[must_use]
    pub fn global_flags(&self, general: Option<&GeneralConfig>) -> GlobalFlags {
        let format = self
            .format
            .or_else(|| general.and_then(|g| OutputFormat::from_config(&g.format)))
            .unwrap_or(OutputFormat::Json);
        GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
            server: self.server,
        }
    }
}
