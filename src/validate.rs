//! Query string recognition and normalization.
//!
//! Accepted forms are `#RRGGBB`, `rgb(r, g, b)` and `hsl(h, s, l)`. Every
//! accepted query normalizes to a `#RRGGBB` string ready for search.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{Hsl, Rgb};
use crate::error::ColorError;
use crate::math;

static HEX_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex query regex should be valid"));

static RGB_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)$").expect("rgb query regex should be valid")
});

static HSL_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^hsl\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)$").expect("hsl query regex should be valid")
});

/// Whether `query` is exactly one of the accepted colour forms.
pub fn is_valid_color(query: &str) -> bool {
    HEX_QUERY.is_match(query) || RGB_QUERY.is_match(query) || HSL_QUERY.is_match(query)
}

/// Convert an `rgb(...)` or `hsl(...)` query to `#RRGGBB`.
///
/// Any other input is returned unchanged. Only numeric ranges are checked
/// here; callers validate syntax with [`is_valid_color`] first.
pub fn convert_to_hex(query: &str) -> Result<String, ColorError> {
    if let Some([r, g, b]) = components(&RGB_QUERY, query) {
        return match (byte_in(r, 255), byte_in(g, 255), byte_in(b, 255)) {
            (Some(r), Some(g), Some(b)) => Ok(format!("#{}", Rgb::new(r, g, b).to_hex())),
            _ => Err(out_of_range(query)),
        };
    }
    if let Some([h, s, l]) = components(&HSL_QUERY, query) {
        let hue = u16::try_from(h).ok().filter(|h| *h <= 360);
        return match (hue, byte_in(s, 100), byte_in(l, 100)) {
            (Some(h), Some(s), Some(l)) => Ok(format!("#{}", math::hsl_to_hex(Hsl::new(h, s, l)))),
            _ => Err(out_of_range(query)),
        };
    }
    Ok(query.to_string())
}

/// Validate then normalize a raw query in one step.
pub fn normalize_query(query: &str) -> Result<String, ColorError> {
    if !is_valid_color(query) {
        return Err(ColorError::InvalidSyntax {
            input: query.to_string(),
        });
    }
    convert_to_hex(query)
}

/// Captured integers of a functional query. Values too large for `u64`
/// become `u64::MAX` so they fail the range check.
fn components(pattern: &Regex, query: &str) -> Option<[u64; 3]> {
    let caps = pattern.captures(query)?;
    let num = |i: usize| {
        caps.get(i)
            .map_or(u64::MAX, |m| m.as_str().parse().unwrap_or(u64::MAX))
    };
    Some([num(1), num(2), num(3)])
}

fn byte_in(value: u64, max: u8) -> Option<u8> {
    u8::try_from(value).ok().filter(|v| *v <= max)
}

fn out_of_range(query: &str) -> ColorError {
    ColorError::OutOfRange {
        input: query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_valid_color_accepts_three_forms() {
        assert!(is_valid_color("#AABBCC"));
        assert!(is_valid_color("#aabbcc"));
        assert!(is_valid_color("rgb(10, 20, 30)"));
        assert!(is_valid_color("rgb(10,20,30)"));
        assert!(is_valid_color("RGB(10,20,30)"));
        assert!(is_valid_color("hsl(200, 50, 40)"));
    }

    #[test]
    fn test_is_valid_color_rejects_partial_matches() {
        assert!(!is_valid_color("rgb(10,20)"));
        assert!(!is_valid_color("blue"));
        assert!(!is_valid_color("AABBCC"));
        assert!(!is_valid_color("#ABC"));
        assert!(!is_valid_color("#AABBCC "));
        assert!(!is_valid_color("x rgb(1,2,3)"));
        assert!(!is_valid_color("rgb( 1,2,3)"));
        assert!(!is_valid_color("rgb(-1,2,3)"));
    }

    #[test]
    fn test_convert_rgb() {
        assert_eq!(convert_to_hex("rgb(255,0,0)").unwrap(), "#FF0000");
        assert_eq!(convert_to_hex("rgb(10, 20, 30)").unwrap(), "#0A141E");
    }

    #[test]
    fn test_convert_rgb_out_of_range() {
        assert_eq!(
            convert_to_hex("rgb(256,0,0)"),
            Err(ColorError::OutOfRange {
                input: "rgb(256,0,0)".to_string()
            })
        );
        assert!(convert_to_hex("rgb(0,0,99999999999999999999999)").is_err());
    }

    #[test]
    fn test_convert_hsl() {
        assert_eq!(convert_to_hex("hsl(0, 100, 50)").unwrap(), "#FF0000");
        assert_eq!(convert_to_hex("hsl(240,100,50)").unwrap(), "#0000FF");
        assert_eq!(convert_to_hex("hsl(0,0,0)").unwrap(), "#000000");
    }

    #[test]
    fn test_convert_hsl_out_of_range() {
        assert!(convert_to_hex("hsl(361,0,0)").is_err());
        assert!(convert_to_hex("hsl(0,101,0)").is_err());
        assert!(convert_to_hex("hsl(0,0,101)").is_err());
    }

    #[test]
    fn test_convert_passes_hex_through() {
        assert_eq!(convert_to_hex("#abcdef").unwrap(), "#abcdef");
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("RGB(0,0,255)").unwrap(), "#0000FF");
        assert_eq!(
            normalize_query("blue"),
            Err(ColorError::InvalidSyntax {
                input: "blue".to_string()
            })
        );
        assert!(matches!(
            normalize_query("rgb(999,0,0)"),
            Err(ColorError::OutOfRange { .. })
        ));
    }
}
