//! Named framework colors.
//!
//! A small fixed palette. Matching is exact on the canonical hex form; any
//! other color becomes an arbitrary-value token.

use tailscope_style::TRANSPARENT;

/// Canonical hex → palette name.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("#000000", "black"),
    ("#ffffff", "white"),
    (TRANSPARENT, "transparent"),
    ("#ef4444", "red-500"),
    ("#3b82f6", "blue-500"),
    ("#10b981", "green-500"),
    ("#f59e0b", "amber-500"),
    ("#8b5cf6", "violet-500"),
    ("#ec4899", "pink-500"),
    ("#06b6d4", "cyan-500"),
    ("#f97316", "orange-500"),
    ("#84cc16", "lime-500"),
    ("#14b8a6", "teal-500"),
    ("#6366f1", "indigo-500"),
];

/// Palette name for a canonical color, if it has one.
pub fn named_color(hex: &str) -> Option<&'static str> {
    let hex = hex.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(key, _)| *key == hex)
        .map(|(_, name)| *name)
}

/// Color token for a canonical color: `bg-transparent`, `bg-blue-500`
/// or `bg-[#123456]`.
pub fn color_token(prefix: &str, hex: &str) -> String {
    match named_color(hex) {
        Some(name) => format!("{prefix}-{name}"),
        None => format!("{prefix}-[{hex}]"),
    }
}
