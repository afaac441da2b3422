//! Chit CLI - Human-friendly coupon codes
//!
//! Chit generates and validates coupon codes that are easy to read over
//! the phone and safe to type, with per-group checksums that catch typos
//! offline.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate a code
//! chit generate
//!
//! # Validate what a customer typed
//! chit check "djq6 dpmd db6t"
//! ```

#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]

use anyhow::Result;
use clap::Parser;

mod commands;

use commands::{Cli, Command};

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => commands::generate::run(&args),
        Command::Check(args) => commands::check::run(&args),
        Command::Config(args) => commands::config::run(args),
        Command::Completions(args) => commands::completions::run(args.action),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,chit=info,chit_core=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
