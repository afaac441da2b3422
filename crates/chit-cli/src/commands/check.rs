//! Check command implementation.

use anyhow::Result;

use super::{load_config, resolve_style, CheckArgs};

/// Run the check command.
///
/// Prints the canonical form of a valid code. Exits with status 1 when the
/// code does not validate.
pub fn run(args: &CheckArgs) -> Result<()> {
    let config = load_config();
    let style = resolve_style(&config, args.style);
    let parts = args.parts.map_or(style.default_parts(), |p| p as usize);

    match style.parse(&args.code, parts) {
        Ok(code) => {
            if args.json {
                let out = serde_json::json!({
                    "valid": true,
                    "code": code.as_str(),
                    "parts": code.parts(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if !args.quiet {
                println!("{code}");
            }
            Ok(())
        }
        Err(err) => {
            if args.json {
                let out = serde_json::json!({
                    "valid": false,
                    "reason": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if !args.quiet {
                eprintln!("invalid code: {err}");
            }
            std::process::exit(1);
        }
    }
}
