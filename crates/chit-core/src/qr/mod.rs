//! QR rendering for coupon codes
//!
//! Codes printed on vouchers or shown at a till are often scanned rather
//! than typed. The payload is the canonical code text, or a URL built from
//! the configured template with `{code}` substituted.
//!
//! ```
//! use chit_core::code::CodeStyle;
//! use chit_core::config::QrConfig;
//! use chit_core::qr;
//!
//! let code = CodeStyle::dashed().validate("DJQ6-DPMD-DB6T").unwrap();
//! let ascii = qr::render_ascii(&code, &QrConfig::default()).unwrap();
//! assert!(!ascii.is_empty());
//! ```

use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};

use crate::code::Code;
use crate::config::{ErrorCorrection, QrConfig};
use crate::error::{Error, Result};

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => Self::L,
            ErrorCorrection::Medium => Self::M,
            ErrorCorrection::Quartile => Self::Q,
            ErrorCorrection::High => Self::H,
        }
    }
}

/// Build the QR payload for a code
///
/// With a template, every `{code}` placeholder is replaced by the canonical
/// code text; without one the payload is the code itself.
#[must_use]
pub fn payload(code: &Code, template: Option<&str>) -> String {
    match template {
        Some(t) => t.replace("{code}", code.as_str()),
        None => code.as_str().to_string(),
    }
}

/// Render a code as a QR image for terminal display
///
/// Uses Unicode half blocks with inverted colors so the image scans
/// correctly on dark terminal themes.
///
/// # Errors
///
/// Returns an error if the payload does not fit in a QR code.
pub fn render_ascii(code: &Code, options: &QrConfig) -> Result<String> {
    let data = payload(code, options.url_template.as_deref());
    let qr = QrCode::with_error_correction_level(&data, options.error_correction.into())
        .map_err(|e| Error::Qr(e.to_string()))?;
    let image = qr
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build();
    Ok(image)
}

/// Render a code as an SVG image
///
/// # Errors
///
/// Returns an error if the payload does not fit in a QR code.
pub fn render_svg(code: &Code, options: &QrConfig) -> Result<String> {
    let data = payload(code, options.url_template.as_deref());
    let qr = QrCode::with_error_correction_level(&data, options.error_correction.into())
        .map_err(|e| Error::Qr(e.to_string()))?;
    let image = qr
        .render()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Ok(image)
}
