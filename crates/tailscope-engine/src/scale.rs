//! Scale snapping and arbitrary-value helpers shared by the mappers.
//!
//! The spacing scale is 4px per unit. Integer unit counts up to 96 map to a
//! scale step; 0.5, 1.5 and 2.5 are named half steps.

use tailscope_style::{format_number, parse_number, round_half_up};

/// Pixels per spacing unit.
pub const SPACING_BASE: f64 = 4.0;

/// Largest integer step of the spacing scale.
pub const SPACING_MAX: f64 = 96.0;

const HALF_STEPS: [f64; 3] = [0.5, 1.5, 2.5];

/// Snap tolerance in units; absorbs sub-pixel rendering jitter.
const SNAP_TOLERANCE: f64 = 0.1;

/// Spacing token for a length (`"16px"` + `p` → `p-4`).
///
/// Zero and unparseable values produce no token. Negative values use the
/// negative utility form (`-mt-4`) for scale hits.
pub fn spacing(value: &str, prefix: &str) -> String {
    match parse_number(value) {
        Some(px) => spacing_px(px, prefix),
        None => String::new(),
    }
}

/// [`spacing`] for an already parsed pixel value.
pub fn spacing_px(px: f64, prefix: &str) -> String {
    if px == 0.0 {
        return String::new();
    }
    let sign = if px < 0.0 { "-" } else { "" };
    let units = px.abs() / SPACING_BASE;

    if HALF_STEPS.contains(&units) {
        return format!("{sign}{prefix}-{}", format_number(units));
    }
    if units.fract() == 0.0 && units <= SPACING_MAX {
        return format!("{sign}{prefix}-{}", format_number(units));
    }
    let rounded = round_half_up(units);
    if (units - rounded).abs() < SNAP_TOLERANCE {
        return format!("{sign}{prefix}-{}", format_number(rounded));
    }
    format!("{prefix}-[{}px]", format_number(px))
}

/// Integer scale step or arbitrary pixels, without half steps or snapping.
///
/// Used by sizing-style properties (`max-h`, `basis`, `scroll-m`).
pub fn scale_step(px: f64, prefix: &str) -> String {
    let units = px.abs() / SPACING_BASE;
    if units.fract() == 0.0 && units <= SPACING_MAX {
        let sign = if px < 0.0 { "-" } else { "" };
        return format!("{sign}{prefix}-{}", format_number(units));
    }
    format!("{prefix}-[{}px]", format_number(px))
}

/// Fraction name for a common percentage (`50` → `1/2`, `100` → `full`).
pub fn fraction(pct: f64) -> Option<&'static str> {
    const FRACTIONS: [(f64, &str); 6] = [
        (100.0, "full"),
        (50.0, "1/2"),
        (100.0 / 3.0, "1/3"),
        (200.0 / 3.0, "2/3"),
        (25.0, "1/4"),
        (75.0, "3/4"),
    ];
    FRACTIONS
        .iter()
        .find(|(target, _)| (pct - target).abs() < 0.01)
        .map(|(_, name)| *name)
}

/// Whether a length uses a viewport unit (`vw`, `vh`, `vmin`, `vmax`, `dvh`...).
pub fn is_viewport(value: &str) -> bool {
    ["vw", "vh", "vmin", "vmax"]
        .iter()
        .any(|unit| value.contains(unit))
}

/// Escape a raw value for an arbitrary-value token.
///
/// Comma separators collapse (`a, b` → `a,b`) and remaining whitespace
/// becomes `_`, keeping the token free of spaces.
pub fn arbitrary(raw: &str) -> String {
    raw.trim()
        .replace(", ", ",")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// First step of a pixel ladder that matches exactly.
pub fn ladder(px: f64, steps: &[(f64, &'static str)]) -> Option<&'static str> {
    steps
        .iter()
        .find(|(value, _)| *value == px)
        .map(|(_, name)| *name)
}
