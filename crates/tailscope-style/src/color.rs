//! Color normalizer.
//!
//! Turns any browser-resolved color (`rgb(r, g, b)`, `rgba(r, g, b, a)`,
//! `rgb(r g b / a)`, `#hex`, `transparent`) into canonical lowercase
//! `#rrggbb`, or the literal `transparent`.

use crate::number::parse_integer;

/// Canonical form of a fully transparent color.
pub const TRANSPARENT: &str = "transparent";

/// Normalize a resolved color value to `#rrggbb` or `transparent`.
///
/// Empty input, `transparent` and fully transparent black all read as
/// `transparent`. Hex input passes through (lowercased). Anything without a
/// parenthesized channel list is treated as `transparent`.
pub fn normalize_color(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(TRANSPARENT) {
        return TRANSPARENT.to_string();
    }
    if raw.starts_with('#') {
        return raw.to_ascii_lowercase();
    }

    let Some(inner) = parenthesized(raw) else {
        return TRANSPARENT.to_string();
    };

    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c == '/' || c == ' ')
        .filter(|p| !p.is_empty())
        .collect();

    let channel = |i: usize| -> u8 {
        parts
            .get(i)
            .and_then(|p| parse_integer(p))
            .map_or(0, |v| v.clamp(0, 255) as u8)
    };
    let (r, g, b) = (channel(0), channel(1), channel(2));

    if is_transparent_black(r, g, b, parts.get(3).copied()) {
        return TRANSPARENT.to_string();
    }

    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Contents of the first `( ... )` group, if any.
fn parenthesized(raw: &str) -> Option<&str> {
    let open = raw.find('(')?;
    let close = raw[open + 1..].find(')')? + open + 1;
    Some(&raw[open + 1..close])
}

fn is_transparent_black(r: u8, g: u8, b: u8, alpha: Option<&str>) -> bool {
    if (r, g, b) != (0, 0, 0) {
        return false;
    }
    match alpha.map(str::trim) {
        Some(a) => a
            .trim_end_matches('%')
            .parse::<f64>()
            .is_ok_and(|v| v == 0.0),
        None => false,
    }
}
