//! Shadow, opacity, blend and filter mappers.
//!
//! `filter` and `backdrop-filter` hold a list of functions. Each function has
//! its own extractor producing at most one token, and the mapper joins them
//! in a fixed order regardless of the order in the computed value.

use once_cell::sync::Lazy;
use regex::Regex;
use tailscope_style::{format_number, parse_number, round_half_up};

use crate::scale::arbitrary;

static FILTER_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z-]+)\(([^)]*)\)").expect("valid filter pattern"));

const SHADOW_PRESETS: [(&str, &str); 5] = [
    ("0px 1px 2px", "shadow-sm"),
    ("0px 4px 6px", "shadow"),
    ("0px 10px 15px", "shadow-lg"),
    ("0px 20px 25px", "shadow-xl"),
    ("0px 25px 50px", "shadow-2xl"),
];

const OPACITY_STEPS: [i64; 15] = [0, 5, 10, 20, 25, 30, 40, 50, 60, 70, 75, 80, 90, 95, 100];

/// `box-shadow`. Known presets are recognised by their offset/blur triplet;
/// anything else becomes an arbitrary token.
pub fn box_shadow(value: &str) -> String {
    if value.is_empty() || value == "none" {
        return String::new();
    }
    SHADOW_PRESETS
        .iter()
        .find(|(pattern, _)| value.contains(pattern))
        .map(|(_, token)| token.to_string())
        .unwrap_or_else(|| format!("shadow-[{}]", arbitrary(value)))
}

/// Opacity-like value on a percent step scale (`prefix-50`) or arbitrary.
///
/// `1` is elided.
pub fn opacity_step(value: &str, prefix: &str) -> String {
    let Some(alpha) = parse_number(value) else {
        return String::new();
    };
    if alpha == 1.0 {
        return String::new();
    }
    let percent = round_half_up(alpha * 100.0) as i64;
    if OPACITY_STEPS.contains(&percent) {
        format!("{prefix}-{percent}")
    } else {
        format!("{prefix}-[{}]", format_number(alpha))
    }
}

/// `opacity`. `1` is elided.
pub fn opacity(value: &str) -> String {
    opacity_step(value, "opacity")
}

/// `mix-blend-mode`. `normal` is elided.
pub fn mix_blend_mode(value: &str) -> String {
    match value {
        "multiply" | "screen" | "overlay" | "darken" | "lighten" | "color-dodge"
        | "color-burn" | "hard-light" | "soft-light" | "difference" | "exclusion" | "hue"
        | "saturation" | "color" | "luminosity" | "plus-lighter" => {
            format!("mix-blend-{value}")
        }
        _ => String::new(),
    }
}

// =========================================================================
// Filter functions
// =========================================================================

/// Raw argument of the first `name(...)` function in a filter list.
pub fn filter_argument<'a>(filter: &'a str, name: &str) -> Option<&'a str> {
    FILTER_FUNCTION
        .captures_iter(filter)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
}

/// Amount of a numeric filter function as a ratio (`50%` → 0.5).
///
/// An empty argument is the function's default of 1.
pub fn filter_amount(filter: &str, name: &str) -> Option<f64> {
    let argument = filter_argument(filter, name)?;
    if argument.is_empty() {
        return Some(1.0);
    }
    let amount = parse_number(argument)?;
    if argument.ends_with('%') {
        Some(amount / 100.0)
    } else {
        Some(amount)
    }
}

/// Blur radius in px.
pub fn blur_radius(filter: &str) -> Option<f64> {
    filter_argument(filter, "blur").and_then(parse_number)
}

fn blur_token(filter: &str, prefix: &str, largest: f64) -> String {
    let Some(radius) = blur_radius(filter) else {
        return String::new();
    };
    let named = [
        (4.0, "-sm"),
        (8.0, ""),
        (12.0, "-md"),
        (16.0, "-lg"),
        (24.0, "-xl"),
    ];
    if radius <= 0.0 {
        return String::new();
    }
    named
        .iter()
        .filter(|(limit, _)| *limit <= largest)
        .find(|(limit, _)| radius <= *limit)
        .map(|(_, suffix)| format!("{prefix}{suffix}"))
        .unwrap_or_else(|| format!("{prefix}-[{}px]", format_number(radius)))
}

/// `grayscale` / `sepia` / `invert`: full amount → bare token, partial →
/// `name-[N%]`, zero → none.
fn toggle_token(filter: &str, name: &str, prefix: &str) -> String {
    match filter_amount(filter, name) {
        Some(amount) if amount <= 0.0 => String::new(),
        Some(amount) if amount >= 1.0 => prefix.to_string(),
        Some(amount) => format!("{prefix}-[{}%]", format_number(round_half_up(amount * 100.0))),
        None => String::new(),
    }
}

/// `brightness` / `contrast` / `saturate`: `1` is elided, else `name-[N%]`.
fn ratio_token(filter: &str, name: &str, prefix: &str) -> String {
    match filter_amount(filter, name) {
        Some(amount) if amount != 1.0 => {
            format!("{prefix}-[{}%]", format_number(round_half_up(amount * 100.0)))
        }
        _ => String::new(),
    }
}

fn join(tokens: Vec<String>) -> String {
    tokens
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `filter`, in the order blur, grayscale, sepia, invert, brightness,
/// contrast, saturate. `none` is elided.
pub fn filter(value: &str) -> String {
    if value.is_empty() || value == "none" {
        return String::new();
    }
    join(vec![
        blur_token(value, "blur", 16.0),
        toggle_token(value, "grayscale", "grayscale"),
        toggle_token(value, "sepia", "sepia"),
        toggle_token(value, "invert", "invert"),
        ratio_token(value, "brightness", "brightness"),
        ratio_token(value, "contrast", "contrast"),
        ratio_token(value, "saturate", "saturate"),
    ])
}

/// `backdrop-filter`, in the order blur, brightness, saturate, grayscale,
/// sepia, invert. `none` is elided.
pub fn backdrop_filter(value: &str) -> String {
    if value.is_empty() || value == "none" {
        return String::new();
    }
    join(vec![
        blur_token(value, "backdrop-blur", 24.0),
        ratio_token(value, "brightness", "backdrop-brightness"),
        ratio_token(value, "saturate", "backdrop-saturate"),
        toggle_token(value, "grayscale", "backdrop-grayscale"),
        toggle_token(value, "sepia", "backdrop-sepia"),
        toggle_token(value, "invert", "backdrop-invert"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Shadow / opacity / blend
    // =========================================================================

    #[test]
    fn test_shadow_presets() {
        assert_eq!(box_shadow("none"), "");
        assert_eq!(
            box_shadow("rgba(0, 0, 0, 0.05) 0px 1px 2px 0px"),
            "shadow-sm"
        );
        assert_eq!(
            box_shadow("rgba(0, 0, 0, 0.1) 0px 10px 15px -3px, rgba(0, 0, 0, 0.1) 0px 4px 6px -4px"),
            "shadow-lg"
        );
    }

    #[test]
    fn test_shadow_arbitrary_has_no_spaces() {
        assert_eq!(
            box_shadow("rgba(0, 0, 0, 0.2) 0px 3px 7px 0px"),
            "shadow-[rgba(0,0,0,0.2)_0px_3px_7px_0px]"
        );
    }

    #[test]
    fn test_opacity() {
        assert_eq!(opacity("1"), "");
        assert_eq!(opacity("0.5"), "opacity-50");
        assert_eq!(opacity("0"), "opacity-0");
        assert_eq!(opacity("0.33"), "opacity-[0.33]");
        assert_eq!(opacity(""), "");
    }

    #[test]
    fn test_mix_blend_mode() {
        assert_eq!(mix_blend_mode("normal"), "");
        assert_eq!(mix_blend_mode("multiply"), "mix-blend-multiply");
        assert_eq!(mix_blend_mode("bogus"), "");
    }

    // =========================================================================
    // Filter extraction
    // =========================================================================

    #[test]
    fn test_filter_argument() {
        let f = "blur(4px) brightness(1.5)";
        assert_eq!(filter_argument(f, "blur"), Some("4px"));
        assert_eq!(filter_argument(f, "brightness"), Some("1.5"));
        assert_eq!(filter_argument(f, "sepia"), None);
    }

    #[test]
    fn test_filter_amount_percent() {
        assert_eq!(filter_amount("grayscale(50%)", "grayscale"), Some(0.5));
        assert_eq!(filter_amount("grayscale()", "grayscale"), Some(1.0));
        assert_eq!(filter_amount("contrast(1.25)", "contrast"), Some(1.25));
    }

    // =========================================================================
    // filter / backdrop-filter
    // =========================================================================

    #[test]
    fn test_filter_blur_steps() {
        assert_eq!(filter("blur(0px)"), "");
        assert_eq!(filter("blur(4px)"), "blur-sm");
        assert_eq!(filter("blur(8px)"), "blur");
        assert_eq!(filter("blur(12px)"), "blur-md");
        assert_eq!(filter("blur(16px)"), "blur-lg");
        assert_eq!(filter("blur(20px)"), "blur-[20px]");
    }

    #[test]
    fn test_filter_fixed_order() {
        assert_eq!(
            filter("saturate(2) grayscale(1) blur(4px) brightness(0.5)"),
            "blur-sm grayscale brightness-[50%] saturate-[200%]"
        );
    }

    #[test]
    fn test_filter_amounts() {
        assert_eq!(filter("grayscale(0)"), "");
        assert_eq!(filter("sepia(0.5)"), "sepia-[50%]");
        assert_eq!(filter("invert(1)"), "invert");
        assert_eq!(filter("brightness(1)"), "");
        assert_eq!(filter("contrast(125%)"), "contrast-[125%]");
    }

    #[test]
    fn test_filter_none() {
        assert_eq!(filter("none"), "");
        assert_eq!(filter("url(#f)"), "");
    }

    #[test]
    fn test_backdrop_filter() {
        assert_eq!(backdrop_filter("blur(20px)"), "backdrop-blur-xl");
        assert_eq!(backdrop_filter("blur(40px)"), "backdrop-blur-[40px]");
        assert_eq!(
            backdrop_filter("grayscale(1) saturate(1.8) blur(8px)"),
            "backdrop-blur backdrop-saturate-[180%] backdrop-grayscale"
        );
        assert_eq!(backdrop_filter("none"), "");
    }
}
