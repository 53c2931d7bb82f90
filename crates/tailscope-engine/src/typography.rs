//! Font, text and list mappers.

use tailscope_style::{format_number, parse_number};

use crate::scale::{arbitrary, ladder};

const FONT_SIZES: [(f64, &str); 12] = [
    (10.0, "text-[10px]"),
    (12.0, "text-xs"),
    (14.0, "text-sm"),
    (16.0, "text-base"),
    (18.0, "text-lg"),
    (20.0, "text-xl"),
    (24.0, "text-2xl"),
    (30.0, "text-3xl"),
    (36.0, "text-4xl"),
    (48.0, "text-5xl"),
    (60.0, "text-6xl"),
    (72.0, "text-7xl"),
];

/// Browser default font size in px.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// `font-size`. The 16px default is elided.
pub fn font_size(value: &str) -> String {
    let Some(px) = parse_number(value) else {
        return String::new();
    };
    if px == DEFAULT_FONT_SIZE {
        return String::new();
    }
    ladder(px, &FONT_SIZES)
        .map(str::to_string)
        .unwrap_or_else(|| format!("text-[{}px]", format_number(px)))
}

/// `font-weight`. `400` is elided.
pub fn font_weight(value: &str) -> String {
    match value {
        "100" => "font-thin",
        "200" => "font-extralight",
        "300" => "font-light",
        "500" => "font-medium",
        "600" => "font-semibold",
        "700" | "bold" => "font-bold",
        "800" => "font-extrabold",
        "900" => "font-black",
        _ => "",
    }
    .to_string()
}

/// `font-style`.
pub fn font_style(value: &str) -> String {
    match value {
        "italic" | "oblique" => "italic".into(),
        _ => String::new(),
    }
}

/// `text-transform`. `none` is elided.
pub fn text_transform(value: &str) -> String {
    match value {
        "uppercase" | "lowercase" | "capitalize" => value.to_string(),
        _ => String::new(),
    }
}

/// `text-align`. `start` and `left` are elided.
pub fn text_align(value: &str) -> String {
    match value {
        "center" => "text-center",
        "right" => "text-right",
        "justify" => "text-justify",
        "end" => "text-end",
        _ => "",
    }
    .to_string()
}

/// `line-height`, bucketed by its ratio to the font size.
///
/// `normal` (or either value unparseable) yields no token.
pub fn line_height(value: &str, font_size: &str) -> String {
    let (Some(line), Some(size)) = (parse_number(value), parse_number(font_size)) else {
        return String::new();
    };
    if size == 0.0 {
        return String::new();
    }
    let ratio = line / size;
    if ratio == 1.0 {
        "leading-none".into()
    } else if (1.2..=1.3).contains(&ratio) {
        "leading-tight".into()
    } else if (1.4..=1.5).contains(&ratio) {
        "leading-normal".into()
    } else if (1.6..=1.7).contains(&ratio) {
        "leading-relaxed".into()
    } else if ratio >= 1.8 {
        "leading-loose".into()
    } else {
        format!("leading-[{value}]")
    }
}

/// `letter-spacing` in px. `normal` and zero are elided.
pub fn letter_spacing(value: &str) -> String {
    match parse_number(value) {
        None => String::new(),
        Some(px) if px == 0.0 => String::new(),
        Some(px) if px < 0.0 => "tracking-tight".into(),
        Some(px) if px <= 0.5 => "tracking-normal".into(),
        Some(px) if px <= 1.0 => "tracking-wide".into(),
        Some(_) => "tracking-wider".into(),
    }
}

/// `text-decoration-line`; several lines produce several tokens.
pub fn decoration_line(value: &str) -> String {
    value
        .split_whitespace()
        .filter_map(|line| match line {
            "underline" => Some("underline"),
            "overline" => Some("overline"),
            "line-through" => Some("line-through"),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether any decoration line is drawn.
pub fn has_decoration(line: &str) -> bool {
    !decoration_line(line).is_empty()
}

/// `text-decoration-style`. `solid` is elided.
pub fn decoration_style(value: &str) -> String {
    match value {
        "double" | "dotted" | "dashed" | "wavy" => format!("decoration-{value}"),
        _ => String::new(),
    }
}

/// Pixel ladder shared by decoration thickness and underline offset.
fn thin_step(value: &str, prefix: &str, keep_zero: bool) -> String {
    match parse_number(value) {
        Some(px) if px == 0.0 && !keep_zero => String::new(),
        Some(px) if [0.0, 1.0, 2.0, 4.0, 8.0].contains(&px) => {
            format!("{prefix}-{}", format_number(px))
        }
        Some(px) => format!("{prefix}-[{}px]", format_number(px)),
        None => String::new(),
    }
}

/// `text-decoration-thickness`. `auto` is elided.
pub fn decoration_thickness(value: &str) -> String {
    match value {
        "" | "auto" => String::new(),
        "from-font" => "decoration-from-font".into(),
        _ => thin_step(value, "decoration", true),
    }
}

/// `text-underline-offset`. `auto` and zero are elided.
pub fn underline_offset(value: &str) -> String {
    match value {
        "" | "auto" => String::new(),
        _ => thin_step(value, "underline-offset", false),
    }
}

/// `white-space`. `normal` is elided.
pub fn white_space(value: &str) -> String {
    match value {
        "nowrap" | "pre" | "pre-wrap" | "pre-line" | "break-spaces" => {
            format!("whitespace-{value}")
        }
        _ => String::new(),
    }
}

/// `text-overflow`.
pub fn text_overflow(value: &str) -> String {
    match value {
        "ellipsis" => "truncate".into(),
        _ => String::new(),
    }
}

/// `vertical-align`. `baseline` is elided.
pub fn vertical_align(value: &str) -> String {
    match value {
        "top" | "middle" | "bottom" | "text-top" | "text-bottom" | "sub" | "super" => {
            format!("align-{value}")
        }
        _ => String::new(),
    }
}

/// `word-break`. `normal` is elided.
pub fn word_break(value: &str) -> String {
    match value {
        "break-all" => "break-all",
        "keep-all" => "break-keep",
        _ => "",
    }
    .to_string()
}

/// `hyphens`. `manual` is elided.
pub fn hyphens(value: &str) -> String {
    match value {
        "none" => "hyphens-none",
        "auto" => "hyphens-auto",
        _ => "",
    }
    .to_string()
}

/// `text-wrap`. `wrap` is elided.
pub fn text_wrap(value: &str) -> String {
    match value {
        "nowrap" => "text-nowrap",
        "balance" => "text-balance",
        "pretty" => "text-pretty",
        _ => "",
    }
    .to_string()
}

/// `list-style-type`. `disc` is elided.
pub fn list_style_type(value: &str) -> String {
    match value {
        "" | "disc" => String::new(),
        "none" => "list-none".into(),
        "decimal" => "list-decimal".into(),
        _ => format!("list-[{}]", arbitrary(value)),
    }
}

/// `list-style-position`. `outside` is elided.
pub fn list_style_position(value: &str) -> String {
    match value {
        "inside" => "list-inside".into(),
        _ => String::new(),
    }
}
