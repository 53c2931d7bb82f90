//! Border radius, border width and outline mappers.

use tailscope_style::{format_number, normalize_color, parse_number, ElementGeometry, TRANSPARENT};

use crate::color::border_color;
use crate::scale::ladder;

const RADII: [(f64, &str); 7] = [
    (2.0, "rounded-sm"),
    (4.0, "rounded"),
    (6.0, "rounded-md"),
    (8.0, "rounded-lg"),
    (12.0, "rounded-xl"),
    (16.0, "rounded-2xl"),
    (24.0, "rounded-3xl"),
];

/// Pixel tolerance of the circle heuristic.
const CIRCLE_TOLERANCE: f64 = 1.0;

/// Whether a pixel radius renders the element as a circle (or pill).
///
/// A radius of half the shorter side (within 1px) closes the curve;
/// a 40x40 box is circular at 20px but not at 19px. Unknown (zero-sized)
/// geometry is never circular.
pub fn is_circular(radius: f64, geometry: ElementGeometry) -> bool {
    let min_side = geometry.min_side();
    min_side > 0.0 && radius > min_side / 2.0 - CIRCLE_TOLERANCE
}

/// `border-radius`, using the element geometry to detect circles.
pub fn border_radius(value: &str, geometry: ElementGeometry) -> String {
    let Some(radius) = parse_number(value) else {
        return String::new();
    };
    if radius <= 0.0 {
        return String::new();
    }

    if value.contains('%') {
        if radius >= 50.0 {
            return "rounded-full".into();
        }
        return format!("rounded-[{}%]", format_number(radius));
    }

    if is_circular(radius, geometry) {
        return "rounded-full".into();
    }
    ladder(radius, &RADII)
        .map(str::to_string)
        .unwrap_or_else(|| format!("rounded-[{}px]", format_number(radius)))
}

/// `border-width` (1/2/4/8 steps, else arbitrary). Zero is elided.
pub fn border_width(value: &str) -> String {
    match parse_number(value) {
        Some(px) if px <= 0.0 => String::new(),
        Some(px) if px == 1.0 => "border".into(),
        Some(px) if [2.0, 4.0, 8.0].contains(&px) => format!("border-{}", format_number(px)),
        Some(px) => format!("border-[{}px]", format_number(px)),
        None => String::new(),
    }
}

/// Border width and color, emitted together only for a visible border.
pub fn border(width: &str, color: &str) -> String {
    let width_token = border_width(width);
    if width_token.is_empty() || normalize_color(color) == TRANSPARENT {
        return String::new();
    }
    format!("{width_token} {}", border_color(color))
}

/// `outline-style`. `none` is elided.
pub fn outline_style(value: &str) -> String {
    match value {
        "solid" => "outline",
        "dashed" => "outline-dashed",
        "dotted" => "outline-dotted",
        "double" => "outline-double",
        _ => "",
    }
    .to_string()
}

/// Whether an outline is drawn at all.
pub fn has_outline(style: &str) -> bool {
    !style.is_empty() && style != "none"
}

fn outline_step(value: &str, prefix: &str) -> String {
    match parse_number(value) {
        Some(px) if px == 0.0 => String::new(),
        Some(px) if [1.0, 2.0, 4.0, 8.0].contains(&px) => format!("{prefix}-{}", format_number(px)),
        Some(px) => format!("{prefix}-[{}px]", format_number(px)),
        None => String::new(),
    }
}

/// `outline-width`. Zero is elided.
pub fn outline_width(value: &str) -> String {
    outline_step(value, "outline")
}

/// `outline-offset`. Zero is elided.
pub fn outline_offset(value: &str) -> String {
    outline_step(value, "outline-offset")
}
