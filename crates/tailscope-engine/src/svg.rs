//! SVG presentation property mappers. Paint colors live in [`crate::color`].

use tailscope_style::{format_number, parse_number};

use crate::effects::opacity_step;

/// `stroke-width`. `0` and `1` are elided.
pub fn stroke_width(value: &str) -> String {
    match parse_number(value) {
        Some(width) if width == 0.0 || width == 1.0 => String::new(),
        Some(width) if width == 2.0 => "stroke-2".into(),
        Some(width) => format!("stroke-[{}]", format_number(width)),
        None => String::new(),
    }
}

/// `fill-opacity`. `1` is elided.
pub fn fill_opacity(value: &str) -> String {
    opacity_step(value, "fill-opacity")
}

/// `stroke-opacity`. `1` is elided.
pub fn stroke_opacity(value: &str) -> String {
    opacity_step(value, "stroke-opacity")
}

/// `stroke-dasharray`. `none` is elided.
pub fn stroke_dasharray(value: &str) -> String {
    if value.is_empty() || value == "none" {
        return String::new();
    }
    let dashes = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("stroke-dasharray-[{dashes}]")
}

/// `stroke-linecap`. `butt` is elided.
pub fn stroke_linecap(value: &str) -> String {
    match value {
        "round" => "stroke-round",
        "square" => "stroke-square",
        _ => "",
    }
    .to_string()
}

/// `stroke-linejoin`. `miter` is elided.
pub fn stroke_linejoin(value: &str) -> String {
    match value {
        "round" => "stroke-join-round",
        "bevel" => "stroke-join-bevel",
        _ => "",
    }
    .to_string()
}
