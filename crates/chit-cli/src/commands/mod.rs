//! CLI command definitions and handlers.

use clap::{Parser, Subcommand, ValueEnum};

use chit_core::code::CodeStyle;
use chit_core::config::{Config, StyleKind};

/// Load configuration with graceful fallback to defaults.
///
/// This function should be used by all commands to load the user's
/// configuration. If the config file doesn't exist or can't be parsed, it
/// falls back to defaults.
pub fn load_config() -> Config {
    Config::load().unwrap_or_default()
}

/// Resolve the effective code style from config and a CLI override.
///
/// A `--style` flag beats the configured style; a configured part count
/// still applies to whichever style wins.
pub fn resolve_style(config: &Config, style: Option<StyleArg>) -> CodeStyle {
    let kind = style.map_or(config.codes.style, StyleKind::from);
    let base = match kind {
        StyleKind::Dashed => CodeStyle::dashed(),
        StyleKind::Compact => CodeStyle::compact(),
    };
    match config.codes.parts {
        Some(parts) => base.with_default_parts(parts),
        None => base,
    }
}

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;

/// Chit - Human-friendly coupon codes
#[derive(Parser)]
#[command(name = "chit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Generate coupon codes
    Generate(GenerateArgs),

    /// Validate a code and print its canonical form
    Check(CheckArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of four-symbol groups per code
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub parts: Option<u32>,

    /// How many codes to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Presentation style (overrides config)
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print a scannable QR code under each code
    #[arg(long)]
    pub qr: bool,
}

/// Arguments for the check command
#[derive(Parser)]
pub struct CheckArgs {
    /// The code to validate, as typed
    pub code: String,

    /// Number of groups the code must have
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub parts: Option<u32>,

    /// Presentation style (overrides config)
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// No output; the exit status signals validity
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the config command
#[derive(Parser)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show all configuration
    Show,

    /// Show the configuration file path
    Path,

    /// Reset to defaults
    Reset,
}

/// Arguments for the completions command
#[derive(Parser)]
pub struct CompletionsArgs {
    /// Completions subcommand
    #[command(subcommand)]
    pub action: CompletionsAction,
}

/// Completions subcommands
#[derive(Subcommand, Clone, Copy)]
pub enum CompletionsAction {
    /// Install shell completions (auto-detects shell)
    Install {
        /// Override shell detection
        #[arg(long, value_enum)]
        shell: Option<ShellType>,
    },

    /// Uninstall shell completions
    Uninstall {
        /// Override shell detection
        #[arg(long, value_enum)]
        shell: Option<ShellType>,
    },

    /// Generate completions and print to stdout (for manual installation)
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: ShellType,
    },
}

/// Supported shell types for completions
#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum ShellType {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Code presentation styles
#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum StyleArg {
    /// Four-symbol groups joined with dashes
    Dashed,
    /// All symbols run together, no separator
    Compact,
}

impl From<StyleArg> for StyleKind {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Dashed => Self::Dashed,
            StyleArg::Compact => Self::Compact,
        }
    }
}
