//! Flags shared by every `ideforge` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `ideforge generate -v`
//! and `ideforge -v generate` mean the same thing.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - One line per generated target
    -vv     - Every file scanned and written
    -vvv    - Skipped entries and identifier resolution"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// `NO_COLOR` (<https://no-color.org>) sets this too; `0`, `false`, `no`
    /// and `off` leave it unset.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user `ideforge.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Print reports as text or JSON"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Tracing level for the workspace crates. `--quiet` wins over `-v`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// How command results are printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Status lines and tables.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Text,
        }
    }

    #[test]
    fn level_follows_verbosity() {
        assert_eq!(args_with(0, false).log_level(), "warn");
        assert_eq!(args_with(1, false).log_level(), "info");
        assert_eq!(args_with(2, false).log_level(), "debug");
        assert_eq!(args_with(3, false).log_level(), "trace");
        assert_eq!(args_with(10, false).log_level(), "trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(args_with(0, true).log_level(), "error");
        assert_eq!(args_with(3, true).log_level(), "error");
    }
}
