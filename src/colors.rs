//! Color string parsing helpers.
//!
//! Requests usually carry colors as comma-separated hex codes without the
//! leading `#`, e.g. `"ff0000,00ff00,fff"`. These helpers turn such strings
//! into [`Color`] values. They are used by callers of the engine, never by
//! the engine itself.

use crate::WHITE;
use crate::types::{Color, EngineError, Palette};

/// Returns true if `s` only contains lowercase hex digits and commas.
///
/// This is a cheap pattern check; individual parts may still fail to parse
/// and fall back to white in [`parse_color`].
pub fn is_valid_color_string(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c) || c == ',')
}

/// Parses a 3- or 6-digit hex code (without `#`) into a color.
///
/// The short form doubles each digit, so `"f80"` is `(255, 136, 0)`.
/// Anything else falls back to [`WHITE`].
pub fn parse_color(hex: &str) -> Color {
    if !matches!(hex.len(), 3 | 6) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return WHITE;
    }
    hex.parse::<Color>().unwrap_or(WHITE)
}

/// Parses a comma-separated list of hex codes into a palette.
///
/// # Errors
/// * `CapacityExceeded` - More than `N` colors in the string
pub fn parse_palette<const N: usize>(s: &str) -> Result<Palette<N>, EngineError> {
    let mut palette = Palette::new();
    for part in s.split(',') {
        palette
            .push(parse_color(part))
            .map_err(|_| EngineError::CapacityExceeded)?;
    }
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    #[test]
    fn accepts_lowercase_hex_and_commas() {
        assert!(is_valid_color_string("ff0000,00ff00"));
        assert!(is_valid_color_string(""));
        assert!(!is_valid_color_string("FF0000"));
        assert!(!is_valid_color_string("#ff0000"));
        assert!(!is_valid_color_string("ff 00 00"));
    }

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(parse_color("ff8000"), Srgb::new(255, 128, 0));
        assert_eq!(parse_color("f80"), Srgb::new(255, 136, 0));
        assert_eq!(parse_color("ABCDEF"), Srgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn invalid_codes_fall_back_to_white() {
        assert_eq!(parse_color(""), WHITE);
        assert_eq!(parse_color("ff00"), WHITE);
        assert_eq!(parse_color("gg0000"), WHITE);
        assert_eq!(parse_color("+f0000"), WHITE);
        assert_eq!(parse_color("#fff"), WHITE);
    }

    #[test]
    fn palette_keeps_order_and_falls_back_per_part() {
        let palette = parse_palette::<4>("ff0000,zzz,0000ff").unwrap();
        assert_eq!(
            palette.as_slice(),
            &[Srgb::new(255, 0, 0), WHITE, Srgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn palette_rejects_too_many_colors() {
        let result = parse_palette::<2>("f00,0f0,00f");
        assert_eq!(result, Err(EngineError::CapacityExceeded));
    }
}
