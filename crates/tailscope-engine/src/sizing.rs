//! Width, height, min/max sizes, flex-basis, aspect ratio and object fit.

use tailscope_style::{format_number, parse_number, round_half_up};

use crate::scale::{fraction, is_viewport, ladder, scale_step, SPACING_BASE, SPACING_MAX};

/// Intrinsic sizing keyword suffix (`min-content` → `min`).
fn intrinsic(value: &str) -> Option<&'static str> {
    match value {
        "min-content" => Some("min"),
        "max-content" => Some("max"),
        "fit-content" => Some("fit"),
        _ => None,
    }
}

/// `width` / `height` (`prefix` is `w` or `h`).
///
/// Viewport units always become arbitrary tokens; percentages snap to
/// fractions; pixels snap to the spacing scale. `auto` is elided.
pub fn size(value: &str, prefix: &str) -> String {
    if value.is_empty() || value == "auto" {
        return String::new();
    }
    if let Some(keyword) = intrinsic(value) {
        return format!("{prefix}-{keyword}");
    }
    let Some(number) = parse_number(value) else {
        return String::new();
    };

    if is_viewport(value) {
        return format!("{prefix}-[{value}]");
    }

    if value.contains('%') {
        return match fraction(number) {
            Some(name) => format!("{prefix}-{name}"),
            None => format!("{prefix}-[{}%]", format_number(round_half_up(number))),
        };
    }

    if number > 0.0 {
        let units = number / SPACING_BASE;
        if units.fract() == 0.0 && units <= SPACING_MAX {
            return format!("{prefix}-{}", format_number(units));
        }
        return format!("{prefix}-[{}px]", format_number(round_half_up(number)));
    }

    String::new()
}

/// `min-width`. `auto` is elided.
pub fn min_width(value: &str) -> String {
    match value {
        "" | "auto" => String::new(),
        "0px" => "min-w-0".into(),
        "100%" => "min-w-full".into(),
        _ => match intrinsic(value) {
            Some(keyword) => format!("min-w-{keyword}"),
            None => parse_number(value)
                .map(|px| format!("min-w-[{}px]", format_number(px)))
                .unwrap_or_default(),
        },
    }
}

const MAX_WIDTHS: [(f64, &str); 11] = [
    (320.0, "max-w-xs"),
    (384.0, "max-w-sm"),
    (448.0, "max-w-md"),
    (512.0, "max-w-lg"),
    (576.0, "max-w-xl"),
    (672.0, "max-w-2xl"),
    (768.0, "max-w-3xl"),
    (896.0, "max-w-4xl"),
    (1024.0, "max-w-5xl"),
    (1152.0, "max-w-6xl"),
    (1280.0, "max-w-7xl"),
];

/// `max-width`. `none` is elided.
pub fn max_width(value: &str) -> String {
    match value {
        "" | "none" => String::new(),
        "100%" => "max-w-full".into(),
        _ => match intrinsic(value) {
            Some(keyword) => format!("max-w-{keyword}"),
            None => match parse_number(value) {
                Some(px) => ladder(px, &MAX_WIDTHS)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("max-w-[{}px]", format_number(px))),
                None => String::new(),
            },
        },
    }
}

/// `min-height`. `auto` is elided.
pub fn min_height(value: &str) -> String {
    match value {
        "" | "auto" => String::new(),
        "0px" => "min-h-0".into(),
        "100%" => "min-h-full".into(),
        "100vh" => "min-h-screen".into(),
        "100dvh" => "min-h-dvh".into(),
        _ => match intrinsic(value) {
            Some(keyword) => format!("min-h-{keyword}"),
            None => parse_number(value)
                .map(|px| format!("min-h-[{}px]", format_number(px)))
                .unwrap_or_default(),
        },
    }
}

/// `max-height`. `none` is elided.
pub fn max_height(value: &str) -> String {
    match value {
        "" | "none" => String::new(),
        "100%" => "max-h-full".into(),
        "100vh" => "max-h-screen".into(),
        "100dvh" => "max-h-dvh".into(),
        _ => match intrinsic(value) {
            Some(keyword) => format!("max-h-{keyword}"),
            None => parse_number(value)
                .map(|px| scale_step(px, "max-h"))
                .unwrap_or_default(),
        },
    }
}

/// `flex-basis`. `auto` is elided.
pub fn flex_basis(value: &str) -> String {
    if value.is_empty() || value == "auto" {
        return String::new();
    }
    if value == "0px" || value == "0%" {
        return "basis-0".into();
    }
    let Some(number) = parse_number(value) else {
        return String::new();
    };
    if value.contains('%') {
        return match fraction(number) {
            Some(name) => format!("basis-{name}"),
            None => format!("basis-[{}%]", format_number(round_half_up(number))),
        };
    }
    scale_step(number, "basis")
}

/// `aspect-ratio`. `auto` is elided.
pub fn aspect_ratio(value: &str) -> String {
    match value {
        "" | "auto" => String::new(),
        "1 / 1" => "aspect-square".into(),
        "16 / 9" => "aspect-video".into(),
        _ => format!("aspect-[{}]", value.replace(' ', "")),
    }
}

/// `object-fit`. `fill` is elided.
pub fn object_fit(value: &str) -> String {
    match value {
        "contain" => "object-contain",
        "cover" => "object-cover",
        "none" => "object-none",
        "scale-down" => "object-scale-down",
        _ => "",
    }
    .to_string()
}

/// `object-position`. `50% 50%` is elided.
pub fn object_position(value: &str) -> String {
    let token = match value {
        "center" | "center center" => "object-center",
        "top" | "top center" | "50% 0%" => "object-top",
        "right" | "center right" | "100% 50%" => "object-right",
        "bottom" | "bottom center" | "50% 100%" => "object-bottom",
        "left" | "center left" | "0% 50%" => "object-left",
        "left top" | "0% 0%" => "object-left-top",
        "left bottom" | "0% 100%" => "object-left-bottom",
        "right top" | "100% 0%" => "object-right-top",
        "right bottom" | "100% 100%" => "object-right-bottom",
        _ => "",
    };
    token.to_string()
}
