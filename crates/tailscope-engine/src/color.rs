//! Color property mappers.
//!
//! Every mapper normalizes through [`normalize_color`] and then emits a
//! palette or arbitrary token. Each property carries its own skip rule for
//! values indistinguishable from the element or framework default.

use tailscope_style::{normalize_color, TRANSPARENT};

use crate::palette::color_token;

const BLACK: &str = "#000000";

/// `color`. Black is the default text color and is elided.
pub fn text_color(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let hex = normalize_color(raw);
    if hex == BLACK {
        return String::new();
    }
    color_token("text", &hex)
}

/// `background-color`. Transparent is elided.
pub fn background_color(raw: &str) -> String {
    let hex = normalize_color(raw);
    if hex == TRANSPARENT {
        return String::new();
    }
    color_token("bg", &hex)
}

/// `border-color`.
pub fn border_color(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    color_token("border", &normalize_color(raw))
}

/// `fill`. `none` and black (the SVG default) are elided.
pub fn fill(raw: &str) -> String {
    if raw.is_empty() || raw == "none" {
        return String::new();
    }
    let hex = normalize_color(raw);
    if hex == BLACK {
        return String::new();
    }
    color_token("fill", &hex)
}

/// `stroke`. `none`, black and transparent are elided.
pub fn stroke(raw: &str) -> String {
    if raw.is_empty() || raw == "none" {
        return String::new();
    }
    let hex = normalize_color(raw);
    if hex == BLACK || hex == TRANSPARENT {
        return String::new();
    }
    color_token("stroke", &hex)
}

/// `outline-color`. Transparent is elided.
pub fn outline_color(raw: &str) -> String {
    let hex = normalize_color(raw);
    if hex == TRANSPARENT {
        return String::new();
    }
    color_token("outline", &hex)
}

/// `caret-color`. `auto` is elided.
pub fn caret_color(raw: &str) -> String {
    if raw.is_empty() || raw == "auto" {
        return String::new();
    }
    color_token("caret", &normalize_color(raw))
}

/// `accent-color`. `auto` is elided.
pub fn accent_color(raw: &str) -> String {
    if raw.is_empty() || raw == "auto" {
        return String::new();
    }
    color_token("accent", &normalize_color(raw))
}

/// `text-decoration-color`.
///
/// `currentcolor` and a color equal to the element's text color are elided.
pub fn decoration_color(raw: &str, text: &str) -> String {
    if raw.is_empty() || raw.eq_ignore_ascii_case("currentcolor") {
        return String::new();
    }
    let hex = normalize_color(raw);
    if !text.is_empty() && hex == normalize_color(text) {
        return String::new();
    }
    color_token("decoration", &hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // text / background / border
    // =========================================================================

    #[test]
    fn test_text_black_elided() {
        assert_eq!(text_color("rgb(0, 0, 0)"), "");
        assert_eq!(text_color(""), "");
    }

    #[test]
    fn test_text_named_and_arbitrary() {
        assert_eq!(text_color("rgb(255, 255, 255)"), "text-white");
        assert_eq!(text_color("rgb(17, 24, 39)"), "text-[#111827]");
        assert_eq!(text_color("transparent"), "text-transparent");
    }

    #[test]
    fn test_background() {
        assert_eq!(background_color("rgba(0, 0, 0, 0)"), "");
        assert_eq!(background_color(""), "");
        assert_eq!(background_color("rgb(59, 130, 246)"), "bg-blue-500");
        assert_eq!(background_color("rgb(0, 0, 0)"), "bg-black");
    }

    #[test]
    fn test_border() {
        assert_eq!(border_color("rgb(229, 231, 235)"), "border-[#e5e7eb]");
        assert_eq!(border_color(""), "");
    }

    // =========================================================================
    // SVG paint
    // =========================================================================

    #[test]
    fn test_fill() {
        assert_eq!(fill("none"), "");
        assert_eq!(fill("rgb(0, 0, 0)"), "");
        assert_eq!(fill("rgb(255, 255, 255)"), "fill-white");
        assert_eq!(fill("rgb(239, 68, 68)"), "fill-red-500");
        assert_eq!(fill("rgb(1, 2, 3)"), "fill-[#010203]");
    }

    #[test]
    fn test_stroke() {
        assert_eq!(stroke("none"), "");
        assert_eq!(stroke("rgb(0, 0, 0)"), "");
        assert_eq!(stroke("transparent"), "");
        assert_eq!(stroke("rgb(255, 255, 255)"), "stroke-white");
    }

    // =========================================================================
    // outline / caret / accent / decoration
    // =========================================================================

    #[test]
    fn test_outline_color() {
        assert_eq!(outline_color("transparent"), "");
        assert_eq!(outline_color("rgb(0, 0, 0)"), "outline-black");
        assert_eq!(outline_color("rgb(99, 102, 241)"), "outline-indigo-500");
    }

    #[test]
    fn test_caret_and_accent() {
        assert_eq!(caret_color("auto"), "");
        assert_eq!(caret_color("rgb(236, 72, 153)"), "caret-pink-500");
        assert_eq!(caret_color("transparent"), "caret-transparent");
        assert_eq!(accent_color("auto"), "");
        assert_eq!(accent_color("rgb(20, 184, 166)"), "accent-teal-500");
    }

    #[test]
    fn test_decoration_color() {
        assert_eq!(decoration_color("currentcolor", ""), "");
        assert_eq!(decoration_color("rgb(0, 0, 0)", "rgb(0, 0, 0)"), "");
        assert_eq!(
            decoration_color("rgb(239, 68, 68)", "rgb(0, 0, 0)"),
            "decoration-red-500"
        );
        assert_eq!(decoration_color("rgb(1, 1, 1)", ""), "decoration-[#010101]");
    }
}
