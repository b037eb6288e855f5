//! Hex color decoding and RGB/HSL derivation.
//!
//! Token documents author colors as `#RRGGBB` or `#RRGGBBAA`. The alpha
//! byte never participates in channel math: upstream it is carried as a
//! level *name*, so an 8-digit literal decodes to the same triplet as its
//! 6-digit prefix.
//!
//! # Example
//!
//! ```rust
//! use tokenmill::color::{hex_to_rgb, hsl_string, rgb_string, Rgb};
//!
//! let rgb = hex_to_rgb("#17191C").unwrap();
//! assert_eq!(rgb, Rgb(23, 25, 28));
//! assert_eq!(rgb_string(rgb), "rgb(23, 25, 28)");
//! assert_eq!(hsl_string(rgb), "hsl(216, 10%, 10%)");
//! ```

use thiserror::Error;

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Error type for color literal decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The literal is not 6 or 8 hex digits, or a pair is not hexadecimal.
    #[error("malformed hex color: {value:?}")]
    MalformedHex { value: String },
}

/// Decodes a `RRGGBB` or `RRGGBBAA` literal, with or without a leading `#`.
///
/// The trailing alpha byte of an 8-digit literal is validated but
/// discarded; only the first three pairs become channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let malformed = || ColorError::MalformedHex {
        value: hex.to_string(),
    };

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 && digits.len() != 8 {
        return Err(malformed());
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| malformed());
    Ok(Rgb(pair(0)?, pair(2)?, pair(4)?))
}

/// Converts an RGB triplet to HSL.
///
/// Hue is reported in degrees `[0, 360)` rounded to the nearest integer;
/// saturation and lightness as rounded percentages `[0, 100]`.
pub fn rgb_to_hsl(rgb: Rgb) -> (u16, u8, u8) {
    let r = rgb.0 as f64 / 255.0;
    let g = rgb.1 as f64 / 255.0;
    let b = rgb.2 as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let d = max - min;
    let (h, s) = if d == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h * 60.0, s)
    };

    (
        (h.round() as u16) % 360,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Formats a triplet as the `rgb(R, G, B)` string emitted in color records.
pub fn rgb_string(rgb: Rgb) -> String {
    format!("rgb({}, {}, {})", rgb.0, rgb.1, rgb.2)
}

/// Formats a triplet as the `hsl(H, S%, L%)` string emitted in color records.
pub fn hsl_string(rgb: Rgb) -> String {
    let (h, s, l) = rgb_to_hsl(rgb);
    format!("hsl({}, {}%, {}%)", h, s, l)
}

/// Re-encodes a triplet as an uppercase `#RRGGBB` literal.
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Decoding tests
    // =========================================================================

    #[test]
    fn test_decode_6_digit() {
        assert_eq!(hex_to_rgb("#17191C").unwrap(), Rgb(23, 25, 28));
        assert_eq!(hex_to_rgb("000000").unwrap(), Rgb(0, 0, 0));
        assert_eq!(hex_to_rgb("#FFFFFF").unwrap(), Rgb(255, 255, 255));
    }

    #[test]
    fn test_decode_8_digit_drops_alpha() {
        assert_eq!(hex_to_rgb("#17191C1A").unwrap(), hex_to_rgb("#17191C").unwrap());
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(hex_to_rgb("#ff6b35").unwrap(), hex_to_rgb("#FF6B35").unwrap());
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert!(hex_to_rgb("#fff").is_err());
        assert!(hex_to_rgb("#fffffff").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn test_decode_rejects_non_hex_pairs() {
        assert!(hex_to_rgb("#17191Z").is_err());
        // An invalid *alpha* pair is still malformed even though the byte
        // would be discarded.
        assert!(hex_to_rgb("#17191CZZ").is_err());
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        assert!(hex_to_rgb("#17191Ç").is_err());
    }

    // =========================================================================
    // HSL tests
    // =========================================================================

    #[test]
    fn test_hsl_grayscale() {
        assert_eq!(rgb_to_hsl(Rgb(0, 0, 0)), (0, 0, 0));
        assert_eq!(rgb_to_hsl(Rgb(255, 255, 255)), (0, 0, 100));
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(rgb_to_hsl(Rgb(255, 0, 0)), (0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb(0, 255, 0)), (120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb(0, 0, 255)), (240, 100, 50));
    }

    #[test]
    fn test_hsl_hue_wraps_below_360() {
        // A red just tinted toward blue rounds up to 360, which must wrap.
        let (h, _, _) = rgb_to_hsl(Rgb(255, 0, 1));
        assert!(h < 360);
    }

    #[test]
    fn test_format_strings() {
        let rgb = Rgb(23, 25, 28);
        assert_eq!(rgb_string(rgb), "rgb(23, 25, 28)");
        assert_eq!(hsl_string(rgb), "hsl(216, 10%, 10%)");
        assert_eq!(to_hex(rgb), "#17191C");
    }
}
