//! Generate command implementation.

use anyhow::Result;

use chit_core::qr;

use super::{load_config, resolve_style, GenerateArgs};

/// Run the generate command.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = load_config();
    let style = resolve_style(&config, args.style);
    let parts = args.parts.map_or(style.default_parts(), |p| p as usize);

    let codes: Vec<_> = (0..args.count)
        .map(|_| style.generate_parts(parts))
        .collect();

    if args.json {
        let strings: Vec<&str> = codes.iter().map(chit_core::Code::as_str).collect();
        println!("{}", serde_json::to_string_pretty(&strings)?);
        return Ok(());
    }

    for code in &codes {
        println!("{code}");
        if args.qr {
            println!("{}", qr::render_ascii(code, &config.qr)?);
        }
    }

    Ok(())
}
