//! Color values in attribute text.
//!
//! Accepts `RGB(r, g, b)` with decimal or `0x` channels in `0..=255`, and
//! every literal form understood by [`Color::parse`]. The `CMYK`, `HSB`,
//! `Lab` and `GRAY` functions are recognized but not supported.

use quire_core::color::Color;

use crate::{
    error::{Diagnostic, ErrorCode},
    scanner::{AttributeScanner, is_digits},
};

const UNSUPPORTED: &[&str] = &["CMYK", "HSB", "LAB", "GRAY"];

/// Parses a color attribute value.
///
/// The returned diagnostic carries a code and message but no position.
///
/// ```
/// # use quire_parser::parse_color;
/// let color = parse_color("RGB(255, 0, 0x80)").unwrap();
/// assert_eq!(color.argb(), 0xFFFF0080);
///
/// let err = parse_color("RGB(300, 0, 0)").unwrap_err();
/// assert_eq!(err.code().map(|c| c.as_str()), Some("E206"));
/// ```
pub fn parse_color(text: &str) -> Result<Color, Diagnostic> {
    let mut scanner = AttributeScanner::new(text, true);
    scanner.scan('(');
    let function = scanner.token().to_owned();

    if function.eq_ignore_ascii_case("RGB") {
        return parse_rgb(&mut scanner, text);
    }
    if UNSUPPORTED.iter().any(|f| function.eq_ignore_ascii_case(f)) {
        return Err(Diagnostic::error(format!("`{function}` colors are not supported"))
            .with_code(ErrorCode::E400)
            .with_help("use `RGB(r, g, b)` or a named color"));
    }

    Color::parse(text).map_err(|err| {
        Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E204)
            .with_help("expected `RGB(r, g, b)`, `#rrggbb`, `0xaarrggbb` or a color name")
    })
}

fn parse_rgb(scanner: &mut AttributeScanner<'_>, text: &str) -> Result<Color, Diagnostic> {
    let mut channels = [0u8; 3];
    for (index, channel) in channels.iter_mut().enumerate() {
        let separator = if index < 2 {
            if !scanner.peek(',') {
                return Err(Diagnostic::error(format!("missing comma in `{text}`"))
                    .with_code(ErrorCode::E207));
            }
            ','
        } else {
            ')'
        };
        scanner.scan(separator);
        *channel = channel_value(scanner)?;
    }
    let [r, g, b] = channels;
    Ok(Color::from_rgb(r, g, b))
}

fn channel_value(scanner: &AttributeScanner<'_>) -> Result<u8, Diagnostic> {
    let token = scanner.token();
    let out_of_range = || {
        Diagnostic::error(format!("value out of range, expected 0 - 255, found `{token}`"))
            .with_code(ErrorCode::E206)
    };

    if scanner.is_integer() || scanner.is_hex_integer() {
        let value = scanner.to_u32().ok_or_else(out_of_range)?;
        return u8::try_from(value).map_err(|_| out_of_range());
    }
    // Negative or oversized decimal numbers are numbers, just not channels.
    if is_digits(token.strip_prefix('-').unwrap_or(token)) {
        return Err(out_of_range());
    }
    Err(Diagnostic::error(format!("integer expected, found `{token}`")).with_code(ErrorCode::E200))
}
