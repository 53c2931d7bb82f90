//! Margin, padding, gap and scroll spacing.

use tailscope_style::{parse_number, Side, StyleSnapshot};

use crate::scale::{scale_step, spacing, spacing_px};

/// Per-side pixel values of a box property, in top/right/bottom/left order.
///
/// Unparseable sides (`auto`, absent) count as zero.
pub fn box_sides(snapshot: &StyleSnapshot, property: &str) -> [f64; 4] {
    Side::ALL.map(|side| parse_number(snapshot.side(property, side)).unwrap_or(0.0))
}

/// Collapse four sides into the fewest spacing tokens.
///
/// All equal → `p-4`; equal top/bottom → `py-*`, otherwise `pt-*`/`pb-*`;
/// equal left/right → `px-*`, otherwise `pl-*`/`pr-*`. Zero sides never emit.
pub fn box_spacing(sides: [f64; 4], base: &str) -> String {
    let [top, right, bottom, left] = sides;
    let mut tokens = Vec::new();

    if top == right && top == bottom && top == left {
        tokens.push(spacing_px(top, base));
        return join(tokens);
    }

    if top == bottom {
        tokens.push(spacing_px(top, &format!("{base}y")));
    } else {
        tokens.push(spacing_px(top, &format!("{base}t")));
        tokens.push(spacing_px(bottom, &format!("{base}b")));
    }

    if right == left {
        tokens.push(spacing_px(right, &format!("{base}x")));
    } else {
        tokens.push(spacing_px(left, &format!("{base}l")));
        tokens.push(spacing_px(right, &format!("{base}r")));
    }

    join(tokens)
}

/// `padding` of a snapshot, collapsed.
pub fn padding(snapshot: &StyleSnapshot) -> String {
    box_spacing(box_sides(snapshot, "padding"), "p")
}

/// `margin` of a snapshot, collapsed.
pub fn margin(snapshot: &StyleSnapshot) -> String {
    box_spacing(box_sides(snapshot, "margin"), "m")
}

/// `gap`. A two-value gap with differing row/column gaps splits into
/// `gap-y-*` and `gap-x-*`.
pub fn gap(raw: &str) -> String {
    if raw.is_empty() || raw == "0px" || raw == "normal" {
        return String::new();
    }
    let parts: Vec<&str> = raw.split_whitespace().collect();
    match parts.as_slice() {
        [row, column] if parse_number(row) != parse_number(column) => {
            join(vec![spacing(row, "gap-y"), spacing(column, "gap-x")])
        }
        _ => spacing(raw, "gap"),
    }
}

/// `scroll-margin-*` / `scroll-padding-*` for one side
/// (`prefix` is e.g. `scroll-mt`).
pub fn scroll_spacing(raw: &str, prefix: &str) -> String {
    match parse_number(raw) {
        Some(px) if px != 0.0 => scale_step(px, prefix),
        _ => String::new(),
    }
}

/// Scroll margin or padding for all four sides (`base` is `scroll-m` or
/// `scroll-p`).
pub fn scroll_box(snapshot: &StyleSnapshot, property: &str, base: &str) -> String {
    let tokens = Side::ALL
        .iter()
        .map(|side| {
            let prefix = format!("{base}{}", &side.as_str()[..1]);
            scroll_spacing(snapshot.get(&format!("{property}-{}", side.as_str())), &prefix)
        })
        .collect();
    join(tokens)
}

fn join(tokens: Vec<String>) -> String {
    tokens
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
