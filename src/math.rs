//! Colour math — hex, RGB and HSL conversions plus RGB distance.
//!
//! RGB channels are 0–255, hue is in degrees and saturation/lightness are
//! percentages. Rounding rules are fixed so catalog annotations stay
//! reproducible: HSL components are rounded up, hex packing rounds half up.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{Hsl, Rgb};
use crate::error::ColorError;

static HEX_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-f0-9]{6}|[a-f0-9]{3}").expect("hex run regex should be valid"));

/// Parse the first 6- or 3-digit hex run found anywhere in `hex`.
///
/// Shorthand runs are expanded by doubling each digit (`f0a` → `ff00aa`).
pub fn try_hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let no_digits = || ColorError::NoHexDigits {
        input: hex.to_string(),
    };
    let run = HEX_RUN.find(hex).ok_or_else(no_digits)?.as_str();

    let digits = if run.len() == 3 {
        run.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        run.to_string()
    };
    let packed = u32::from_str_radix(&digits, 16).map_err(|_| no_digits())?;

    Ok(Rgb {
        r: ((packed >> 16) & 0xff) as u8,
        g: ((packed >> 8) & 0xff) as u8,
        b: (packed & 0xff) as u8,
    })
}

/// Lenient [`try_hex_to_rgb`]: input without a hex run becomes black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    try_hex_to_rgb(hex).unwrap_or_else(|err| {
        log::warn!("{err}, using black");
        Rgb::default()
    })
}

/// Pack channels into uppercase `RRGGBB` (no `#`).
///
/// Each channel is rounded half up, then masked to its low byte, so
/// out-of-range values wrap instead of clamping.
pub fn rgb_to_hex((r, g, b): (f64, f64, f64)) -> String {
    fn byte(v: f64) -> u32 {
        ((v + 0.5).floor() as i64 & 0xff) as u32
    }
    let packed = (byte(r) << 16) | (byte(g) << 8) | byte(b);
    format!("{packed:06X}")
}

/// RGB → HSL. Each component is rounded up to the next whole number.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if max == min {
        0.0
    } else if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut h = (h * 60.0).min(360.0);
    if h < 0.0 {
        h += 360.0;
    }

    let l = (min + max) / 2.0;
    let s = if max == min {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    Hsl {
        h: h.ceil() as u16,
        s: (s * 100.0).ceil() as u8,
        l: (l * 100.0).ceil() as u8,
    }
}

/// HSL → RGB on the 0–255 scale, unrounded.
pub fn hsl_to_rgb(hsl: Hsl) -> (f64, f64, f64) {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return (v, v, v);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let channel = |offset: f64| {
        let mut t3 = h + offset;
        if t3 < 0.0 {
            t3 += 1.0;
        }
        if t3 > 1.0 {
            t3 -= 1.0;
        }
        let v = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };
        v * 255.0
    };

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

pub fn hex_to_hsl(hex: &str) -> Hsl {
    rgb_to_hsl(hex_to_rgb(hex))
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Euclidean distance between two colours in RGB space.
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}
