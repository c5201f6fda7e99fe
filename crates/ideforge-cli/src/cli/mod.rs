//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ideforge_core::domain::{IdMode, Ide};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ideforge",
    bin_name = "ideforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate IDE project files from a source tree",
    long_about = "ideforge scans a C/C++ source tree and writes Visual Studio, \
                  Xcode and CodeWarrior project files for it, driven by an \
                  optional projects.json script.",
    after_help = "EXAMPLES:\n\
        \x20 ideforge generate --vs2010 --xcode4\n\
        \x20 ideforge generate -C ../burger -f projects.json\n\
        \x20 ideforge inspect --mode truncated\n\
        \x20 ideforge completions bash > /usr/share/bash-completion/completions/ideforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate project files.
    #[command(
        visible_alias = "g",
        about = "Generate project files",
        after_help = "EXAMPLES:\n\
            \x20 ideforge generate --vs2008 --vs2010   # no script: default project\n\
            \x20 ideforge generate                     # runs ./projects.json\n\
            \x20 ideforge generate -f lib.json -f tools.json --fail-fast"
    )]
    Generate(GenerateArgs),

    /// Show what discovery finds, without writing anything.
    #[command(
        about = "Inspect the source model",
        after_help = "EXAMPLES:\n\
            \x20 ideforge inspect\n\
            \x20 ideforge inspect --mode truncated --format json"
    )]
    Inspect(InspectArgs),

    /// List supported targets or platforms.
    #[command(
        visible_alias = "ls",
        about = "List targets or platforms",
        after_help = "EXAMPLES:\n\
            \x20 ideforge list\n\
            \x20 ideforge list platforms"
    )]
    List(ListArgs),

    /// Initialise an ideforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ideforge init          # default location\n\
            \x20 ideforge init --force  # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ideforge completions bash > ~/.local/share/bash-completion/completions/ideforge\n\
            \x20 ideforge completions zsh  > ~/.zfunc/_ideforge\n\
            \x20 ideforge completions fish > ~/.config/fish/completions/ideforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Read the ideforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ideforge config get generate.policy\n\
            \x20 ideforge config list\n\
            \x20 ideforge config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `ideforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long = "xcode3", help = "Generate an Xcode 3 project")]
    pub xcode3: bool,

    #[arg(long = "xcode4", help = "Generate an Xcode 4 project")]
    pub xcode4: bool,

    #[arg(long = "xcode5", help = "Generate an Xcode 5 project")]
    pub xcode5: bool,

    #[arg(long = "vs2005", help = "Generate a Visual Studio 2005 project")]
    pub vs2005: bool,

    #[arg(long = "vs2008", help = "Generate a Visual Studio 2008 project")]
    pub vs2008: bool,

    #[arg(long = "vs2010", help = "Generate a Visual Studio 2010 project")]
    pub vs2010: bool,

    #[arg(long = "codeblocks", help = "Generate a Code::Blocks project")]
    pub codeblocks: bool,

    #[arg(long = "codewarrior", help = "Generate a CodeWarrior project")]
    pub codewarrior: bool,

    /// Project scripts to run, in order, relative to the project directory.
    /// Settings carry over between files.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Project script (repeatable)"
    )]
    pub files: Vec<PathBuf>,

    /// Directory to generate in.
    #[arg(
        short = 'C',
        long = "directory",
        value_name = "DIR",
        help = "Project directory (default: current directory)"
    )]
    pub directory: Option<PathBuf>,

    /// Stop at the first failing target.
    #[arg(long = "fail-fast", help = "Stop at the first failing target")]
    pub fail_fast: bool,
}

impl GenerateArgs {
    /// Targets asked for on the command line, in a fixed order.
    pub fn requested(&self) -> Vec<Ide> {
        [
            (self.xcode3, Ide::Xcode3),
            (self.xcode4, Ide::Xcode4),
            (self.xcode5, Ide::Xcode5),
            (self.vs2005, Ide::Vs2005),
            (self.vs2008, Ide::Vs2008),
            (self.vs2010, Ide::Vs2010),
            (self.codeblocks, Ide::CodeBlocks),
            (self.codewarrior, Ide::CodeWarrior),
        ]
        .into_iter()
        .filter_map(|(on, ide)| on.then_some(ide))
        .collect()
    }
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `ideforge inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Directory to inspect.
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Script whose first target's settings are inspected.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Identifier scheme to show.
    #[arg(long = "mode", value_enum, default_value = "namespace")]
    pub mode: ModeArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: InspectFormat,
}

/// Identifier scheme, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// UUID v3 style, as Visual Studio uses.
    Namespace,
    /// 24 hex digits, as Xcode uses.
    Truncated,
}

impl From<ModeArg> for IdMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Namespace => IdMode::NamespaceHash,
            ModeArg::Truncated => IdMode::TruncatedContentHash,
        }
    }
}

/// Output format for the `inspect` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// Human-readable sections.
    Table,
    /// One JSON document.
    Json,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `ideforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// What to list.
    #[arg(value_enum, default_value = "targets")]
    pub what: ListWhat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListWhat {
    /// IDEs and whether they are supported.
    Targets,
    /// Platforms with their codes.
    Platforms,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ideforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ideforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ideforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.policy`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn target_flags_keep_a_fixed_order() {
        let cli = Cli::parse_from(["ideforge", "generate", "--vs2010", "--xcode3", "--codewarrior"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(
            args.requested(),
            vec![Ide::Xcode3, Ide::Vs2010, Ide::CodeWarrior]
        );
    }

    #[test]
    fn scripts_are_repeatable() {
        let cli = Cli::parse_from(["ideforge", "generate", "-f", "a.json", "-f", "b.json"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert!(args.requested().is_empty());
    }

    #[test]
    fn inspect_defaults() {
        let cli = Cli::parse_from(["ideforge", "inspect"]);
        let Commands::Inspect(args) = cli.command else {
            panic!("expected Inspect command");
        };
        assert_eq!(IdMode::from(args.mode), IdMode::NamespaceHash);
        assert_eq!(args.format, InspectFormat::Table);
    }

    #[test]
    fn list_defaults_to_targets() {
        let cli = Cli::parse_from(["ideforge", "ls"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.what, ListWhat::Targets);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["ideforge", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
