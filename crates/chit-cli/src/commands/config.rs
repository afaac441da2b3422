//! Config command implementation.

use anyhow::Result;

use chit_core::config::{Config, ErrorCorrection, StyleKind};

use super::{ConfigAction, ConfigArgs};

/// Run the config command.
pub fn run(args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Show => show(),
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Configuration reset to defaults.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;

    println!();
    println!("Chit Configuration");
    println!("{}", "─".repeat(40));
    println!();
    println!("[codes]");
    println!("  style = \"{}\"", style_name(config.codes.style));
    match config.codes.parts {
        Some(parts) => println!("  parts = {}", parts),
        None => println!("  # parts unset, using the style default"),
    }
    println!();
    println!("[qr]");
    match &config.qr.url_template {
        Some(template) => println!("  url_template = \"{}\"", template),
        None => println!("  # url_template unset, QR encodes the bare code"),
    }
    println!(
        "  error_correction = \"{}\"",
        ec_name(config.qr.error_correction)
    );
    println!();

    Ok(())
}

const fn style_name(style: StyleKind) -> &'static str {
    match style {
        StyleKind::Dashed => "dashed",
        StyleKind::Compact => "compact",
    }
}

const fn ec_name(level: ErrorCorrection) -> &'static str {
    match level {
        ErrorCorrection::Low => "low",
        ErrorCorrection::Medium => "medium",
        ErrorCorrection::Quartile => "quartile",
        ErrorCorrection::High => "high",
    }
}
