//! Transform mappers.
//!
//! Authored transform lists are decomposed per function (scale, rotate,
//! translate, skew), each contributing at most one token. A computed
//! `matrix(a, b, c, d, e, f)` is decomposed into uniform scale, rotation and
//! translation first.

use once_cell::sync::Lazy;
use regex::Regex;
use tailscope_style::{format_number, parse_number, round_half_up};

use crate::scale::arbitrary;

static SCALE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"scale\(\s*(-?[\d.]+)(?:\s*,\s*(-?[\d.]+))?\s*\)").expect("valid scale pattern")
});

static ROTATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rotate\(\s*(-?[\d.]+)deg\s*\)").expect("valid rotate pattern"));

static TRANSLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"translate(X|Y|3d)?\(\s*(-?[\d.]+)(px|%)?(?:\s*,\s*(-?[\d.]+)(px|%)?)?")
        .expect("valid translate pattern")
});

static SKEW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"skew(X|Y)?\(\s*(-?[\d.]+)deg").expect("valid skew pattern"));

static MATRIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"matrix\(([^)]*)\)").expect("valid matrix pattern"));

const STANDARD_ANGLES: [f64; 9] = [0.0, 1.0, 2.0, 3.0, 6.0, 12.0, 45.0, 90.0, 180.0];

/// Round to a fixed number of decimals, absorbing trigonometric noise.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

/// Uniform scale factor as a percent token. `1` and non-uniform scales are
/// elided.
pub fn scale_factor(x: f64, y: f64) -> String {
    if x != y || x == 1.0 {
        return String::new();
    }
    format!("scale-[{}%]", format_number(round_half_up(x * 100.0)))
}

/// Rotation in degrees; standard angles use the scale, negatives the
/// negative utility form.
pub fn rotation(degrees: f64) -> String {
    if degrees == 0.0 {
        return String::new();
    }
    let magnitude = degrees.abs();
    if STANDARD_ANGLES.contains(&magnitude) {
        let sign = if degrees < 0.0 { "-" } else { "" };
        return format!("{sign}rotate-{}", format_number(magnitude));
    }
    format!("rotate-[{}deg]", format_number(degrees))
}

/// Translation along one axis (`x` or `y`).
pub fn translation(axis: &str, amount: f64, unit: &str) -> String {
    if amount == 0.0 {
        return String::new();
    }
    format!("translate-{axis}-[{}{unit}]", format_number(amount))
}

/// `scale(x[, y])` in an authored transform list.
pub fn scale(transform: &str) -> String {
    let Some(caps) = SCALE.captures(transform) else {
        return String::new();
    };
    let Some(x) = parse_number(&caps[1]) else {
        return String::new();
    };
    let y = caps.get(2).and_then(|m| parse_number(m.as_str())).unwrap_or(x);
    scale_factor(x, y)
}

/// `rotate(Ndeg)` in an authored transform list.
pub fn rotate(transform: &str) -> String {
    ROTATE
        .captures(transform)
        .and_then(|caps| parse_number(&caps[1]))
        .map(rotation)
        .unwrap_or_default()
}

/// `translate()`, `translateX()`, `translateY()` or `translate3d()`.
///
/// The x component wins; a pure vertical translation emits `translate-y`.
pub fn translate(transform: &str) -> String {
    let Some(caps) = TRANSLATE.captures(transform) else {
        return String::new();
    };
    let first = parse_number(&caps[2]).unwrap_or(0.0);
    let first_unit = caps.get(3).map_or("px", |m| m.as_str());

    if caps.get(1).map(|m| m.as_str()) == Some("Y") {
        return translation("y", first, first_unit);
    }
    if first != 0.0 {
        return translation("x", first, first_unit);
    }
    let second = caps.get(4).and_then(|m| parse_number(m.as_str())).unwrap_or(0.0);
    let second_unit = caps.get(5).map_or("px", |m| m.as_str());
    translation("y", second, second_unit)
}

/// `skew()`, `skewX()` or `skewY()`.
pub fn skew(transform: &str) -> String {
    let Some(caps) = SKEW.captures(transform) else {
        return String::new();
    };
    let degrees = parse_number(&caps[2]).unwrap_or(0.0);
    if degrees == 0.0 {
        return String::new();
    }
    let axis = if caps.get(1).map(|m| m.as_str()) == Some("Y") { "y" } else { "x" };
    format!("skew-{axis}-[{}deg]", format_number(degrees))
}

/// Scale, rotation and translation recovered from a 2D matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixParts {
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

/// Components of a six-value `matrix(a, b, c, d, e, f)`.
fn matrix_values(transform: &str) -> Option<[f64; 6]> {
    let caps = MATRIX.captures(transform)?;
    let values: Vec<f64> = caps[1]
        .split(',')
        .map(parse_number)
        .collect::<Option<Vec<_>>>()?;
    values.try_into().ok()
}

/// Decompose `matrix(a, b, c, d, e, f)`. Returns `None` for anything that is
/// not a six-component 2D matrix, and for mirrored matrices (negative
/// determinant), which no scale plus rotation reproduces.
pub fn decompose_matrix(transform: &str) -> Option<MatrixParts> {
    let [a, b, c, d, e, f] = matrix_values(transform)?;
    if a * d - b * c < 0.0 {
        return None;
    }
    Some(MatrixParts {
        scale_x: round_to(a.hypot(b), 4),
        scale_y: round_to(c.hypot(d), 4),
        rotation: round_to(b.atan2(a).to_degrees(), 2),
        translate_x: round_to(e, 2),
        translate_y: round_to(f, 2),
    })
}

fn join(tokens: Vec<String>) -> String {
    tokens
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `transform`. `none` is elided; a mirrored matrix is kept verbatim as an
/// arbitrary `[transform:matrix(...)]` token.
pub fn transform(value: &str) -> String {
    if value.is_empty() || value == "none" {
        return String::new();
    }
    if matrix_values(value).is_some() {
        let Some(parts) = decompose_matrix(value) else {
            return format!("[transform:{}]", arbitrary(value));
        };
        let shift = match parts.translate_x {
            x if x != 0.0 => translation("x", x, "px"),
            _ => translation("y", parts.translate_y, "px"),
        };
        return join(vec![
            scale_factor(parts.scale_x, parts.scale_y),
            rotation(parts.rotation),
            shift,
        ]);
    }
    join(vec![scale(value), rotate(value), translate(value), skew(value)])
}

/// `transform-origin`. The centre and pixel origins are elided.
pub fn transform_origin(value: &str) -> String {
    if value.contains("px") {
        return String::new();
    }
    let token = match value {
        "top" | "top center" | "50% 0%" => "origin-top",
        "top right" | "right top" | "100% 0%" => "origin-top-right",
        "right" | "center right" | "100% 50%" => "origin-right",
        "bottom right" | "right bottom" | "100% 100%" => "origin-bottom-right",
        "bottom" | "bottom center" | "50% 100%" => "origin-bottom",
        "bottom left" | "left bottom" | "0% 100%" => "origin-bottom-left",
        "left" | "center left" | "0% 50%" => "origin-left",
        "top left" | "left top" | "0% 0%" => "origin-top-left",
        _ => "",
    };
    token.to_string()
}
