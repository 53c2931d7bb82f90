//! Positioning, display, flex/grid and flow-layout mappers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tailscope_style::{format_number, parse_integer, parse_number};

use crate::scale::{arbitrary, ladder};

static REPEAT_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"repeat\((\d+)").expect("valid repeat pattern"));

/// What to do with grid track counts outside the supported range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridOverflow {
    /// Emit no token.
    #[default]
    Drop,
    /// Emit an arbitrary track-list token (`grid-cols-[...]`).
    Arbitrary,
}

/// Supported `grid-cols-*` range.
pub const MAX_GRID_COLUMNS: usize = 12;

/// Supported `grid-rows-*` range.
pub const MAX_GRID_ROWS: usize = 6;

// =========================================================================
// Positioning
// =========================================================================

/// `position`. `static` is elided.
pub fn position(value: &str) -> String {
    match value {
        "absolute" | "fixed" | "sticky" | "relative" => value.to_string(),
        _ => String::new(),
    }
}

/// Whether a `position` value takes part in inset placement.
pub fn is_positioned(value: &str) -> bool {
    !position(value).is_empty()
}

fn is_auto(side: &str) -> bool {
    side.is_empty() || side == "auto"
}

fn inset_side(raw: &str, prefix: &str) -> String {
    if is_auto(raw) {
        return String::new();
    }
    match parse_number(raw) {
        Some(n) if n == 0.0 => format!("{prefix}-0"),
        _ => format!("{prefix}-[{}]", arbitrary(raw)),
    }
}

/// Inset pair collapsed to an axis token when both sides agree.
fn inset_axis(first: &str, second: &str, axis: &str) -> Option<String> {
    if is_auto(first) || is_auto(second) || parse_number(first) != parse_number(second) {
        return None;
    }
    match parse_number(first) {
        Some(n) if n == 0.0 => Some(format!("inset-{axis}-0")),
        Some(_) => Some(format!("inset-{axis}-[{}]", arbitrary(first))),
        None if first == second => Some(format!("inset-{axis}-[{}]", arbitrary(first))),
        None => None,
    }
}

/// `top` / `right` / `bottom` / `left` of a positioned element.
///
/// All four zero → `inset-0`; equal left/right and top/bottom pairs collapse
/// to `inset-x-*` / `inset-y-*`; otherwise one token per side. `auto` (or
/// absent) sides never emit.
pub fn inset(top: &str, right: &str, bottom: &str, left: &str) -> String {
    let sides = [top, right, bottom, left];
    if sides.iter().all(|s| is_auto(s)) {
        return String::new();
    }
    if sides
        .iter()
        .all(|s| !is_auto(s) && parse_number(s) == Some(0.0))
    {
        return "inset-0".into();
    }

    let mut tokens = Vec::new();
    match inset_axis(left, right, "x") {
        Some(token) => tokens.push(token),
        None => {
            tokens.push(inset_side(left, "left"));
            tokens.push(inset_side(right, "right"));
        }
    }
    match inset_axis(top, bottom, "y") {
        Some(token) => tokens.push(token),
        None => {
            tokens.push(inset_side(top, "top"));
            tokens.push(inset_side(bottom, "bottom"));
        }
    }
    join(tokens)
}

/// `z-index`. `auto` and `0` are elided.
pub fn z_index(value: &str) -> String {
    if value.is_empty() || value == "auto" || value == "0" {
        return String::new();
    }
    match parse_integer(value) {
        Some(z @ (10 | 20 | 30 | 40 | 50)) => format!("z-{z}"),
        Some(0) | None => String::new(),
        Some(z) => format!("z-[{z}]"),
    }
}

// =========================================================================
// Display, flex and grid
// =========================================================================

/// `display`. Block-level and unknown values are elided.
pub fn display(value: &str) -> String {
    match value {
        "flex" => "flex",
        "inline-flex" => "inline-flex",
        "grid" => "grid",
        "inline-grid" => "inline-grid",
        "none" => "hidden",
        "inline-block" => "inline-block",
        "inline" => "inline",
        _ => "",
    }
    .to_string()
}

/// `flex-direction`. `row` is elided.
pub fn flex_direction(value: &str) -> String {
    match value {
        "column" => "flex-col",
        "column-reverse" => "flex-col-reverse",
        "row-reverse" => "flex-row-reverse",
        _ => "",
    }
    .to_string()
}

/// `flex-wrap`. `nowrap` is elided.
pub fn flex_wrap(value: &str) -> String {
    match value {
        "wrap" => "flex-wrap",
        "wrap-reverse" => "flex-wrap-reverse",
        _ => "",
    }
    .to_string()
}

/// `align-items`. `normal` is elided.
pub fn align_items(value: &str) -> String {
    match value {
        "center" => "items-center",
        "flex-start" | "start" => "items-start",
        "flex-end" | "end" => "items-end",
        "baseline" => "items-baseline",
        "stretch" => "items-stretch",
        _ => "",
    }
    .to_string()
}

/// `justify-content`. `normal` is elided.
pub fn justify_content(value: &str) -> String {
    match value {
        "center" => "justify-center",
        "space-between" => "justify-between",
        "space-around" => "justify-around",
        "space-evenly" => "justify-evenly",
        "flex-end" | "end" => "justify-end",
        "flex-start" | "start" => "justify-start",
        _ => "",
    }
    .to_string()
}

/// Number of tracks in a computed track list; `repeat(N, ...)` counts as N.
pub fn track_count(tracks: &str) -> usize {
    if let Some(caps) = REPEAT_COUNT.captures(tracks) {
        if let Ok(count) = caps[1].parse::<usize>() {
            return count;
        }
    }
    tracks
        .split_whitespace()
        .filter(|t| *t != "none")
        .count()
}

fn grid_tracks(tracks: &str, prefix: &str, max: usize, overflow: GridOverflow) -> String {
    if tracks.is_empty() || tracks == "none" {
        return String::new();
    }
    let count = track_count(tracks);
    if (1..=max).contains(&count) {
        return format!("{prefix}-{count}");
    }
    match overflow {
        GridOverflow::Drop => {
            log::trace!(
                target: "tailscope::convert",
                "dropping {prefix} with {count} tracks (supported 1..={max})"
            );
            String::new()
        }
        GridOverflow::Arbitrary => format!("{prefix}-[{}]", arbitrary(tracks)),
    }
}

/// `grid-template-columns` (1–12 tracks).
pub fn grid_columns(tracks: &str, overflow: GridOverflow) -> String {
    grid_tracks(tracks, "grid-cols", MAX_GRID_COLUMNS, overflow)
}

/// `grid-template-rows` (1–6 tracks).
pub fn grid_rows(tracks: &str, overflow: GridOverflow) -> String {
    grid_tracks(tracks, "grid-rows", MAX_GRID_ROWS, overflow)
}

/// `place-items`.
pub fn place_items(value: &str) -> String {
    match value {
        "center" => "place-items-center",
        "start" => "place-items-start",
        "end" => "place-items-end",
        "stretch" => "place-items-stretch",
        _ => "",
    }
    .to_string()
}

/// `place-content`.
pub fn place_content(value: &str) -> String {
    match value {
        "center" => "place-content-center",
        "start" => "place-content-start",
        "end" => "place-content-end",
        "space-between" => "place-content-between",
        "space-around" => "place-content-around",
        "space-evenly" => "place-content-evenly",
        "stretch" => "place-content-stretch",
        _ => "",
    }
    .to_string()
}

/// `align-content`. `normal` is elided.
pub fn align_content(value: &str) -> String {
    match value {
        "center" => "content-center",
        "flex-start" => "content-start",
        "flex-end" => "content-end",
        "space-between" => "content-between",
        "space-around" => "content-around",
        "space-evenly" => "content-evenly",
        "stretch" => "content-stretch",
        "baseline" => "content-baseline",
        _ => "",
    }
    .to_string()
}

/// `align-self`. `auto` is elided.
pub fn align_self(value: &str) -> String {
    match value {
        "flex-start" => "self-start",
        "flex-end" => "self-end",
        "center" => "self-center",
        "stretch" => "self-stretch",
        "baseline" => "self-baseline",
        _ => "",
    }
    .to_string()
}

/// `justify-self`. `auto` is elided.
pub fn justify_self(value: &str) -> String {
    match value {
        "start" => "justify-self-start",
        "end" => "justify-self-end",
        "center" => "justify-self-center",
        "stretch" => "justify-self-stretch",
        _ => "",
    }
    .to_string()
}

/// `justify-items`. `legacy` and `normal` are elided.
pub fn justify_items(value: &str) -> String {
    match value {
        "start" => "justify-items-start",
        "end" => "justify-items-end",
        "center" => "justify-items-center",
        "stretch" => "justify-items-stretch",
        _ => "",
    }
    .to_string()
}

/// `place-self`. `auto` is elided.
pub fn place_self(value: &str) -> String {
    match value {
        "start" => "place-self-start",
        "end" => "place-self-end",
        "center" => "place-self-center",
        "stretch" => "place-self-stretch",
        _ => "",
    }
    .to_string()
}

/// `flex-grow`. `0` is elided.
pub fn flex_grow(value: &str) -> String {
    match parse_number(value) {
        Some(n) if n == 0.0 => String::new(),
        Some(n) if n == 1.0 => "grow".into(),
        Some(n) => format!("grow-[{}]", format_number(n)),
        None => String::new(),
    }
}

/// `flex-shrink`. `1` is elided.
pub fn flex_shrink(value: &str) -> String {
    match parse_number(value) {
        Some(n) if n == 1.0 => String::new(),
        Some(n) if n == 0.0 => "shrink-0".into(),
        Some(n) => format!("shrink-[{}]", format_number(n)),
        None => String::new(),
    }
}

/// `order`. `0` is elided.
pub fn order(value: &str) -> String {
    match parse_integer(value) {
        None | Some(0) => String::new(),
        Some(-1) => "-order-1".into(),
        Some(n @ 1..=12) => format!("order-{n}"),
        Some(9999) => "order-last".into(),
        Some(-9999) => "order-first".into(),
        Some(n) => format!("order-[{n}]"),
    }
}

// =========================================================================
// Flow layout
// =========================================================================

/// `overflow`. `visible` is elided; a two-value `overflow` splits per axis.
pub fn overflow(value: &str) -> String {
    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [single] => overflow_keyword(single, "overflow"),
        [x, y] if x == y => overflow_keyword(x, "overflow"),
        [x, y] => join(vec![
            overflow_keyword(x, "overflow-x"),
            overflow_keyword(y, "overflow-y"),
        ]),
        _ => String::new(),
    }
}

fn overflow_keyword(value: &str, prefix: &str) -> String {
    match value {
        "hidden" | "scroll" | "auto" | "clip" => format!("{prefix}-{value}"),
        _ => String::new(),
    }
}

/// `float`. `none` is elided.
pub fn float(value: &str) -> String {
    match value {
        "left" => "float-left",
        "right" => "float-right",
        "inline-start" => "float-start",
        "inline-end" => "float-end",
        _ => "",
    }
    .to_string()
}

/// `clear`. `none` is elided.
pub fn clear(value: &str) -> String {
    match value {
        "left" => "clear-left",
        "right" => "clear-right",
        "both" => "clear-both",
        "inline-start" => "clear-start",
        "inline-end" => "clear-end",
        _ => "",
    }
    .to_string()
}

const COLUMN_WIDTHS: [(f64, &str); 6] = [
    (256.0, "columns-xs"),
    (288.0, "columns-sm"),
    (320.0, "columns-md"),
    (384.0, "columns-lg"),
    (448.0, "columns-xl"),
    (512.0, "columns-2xl"),
];

/// `column-count` (or a column width in px). `auto` is elided.
pub fn columns(value: &str) -> String {
    if value.is_empty() || value == "auto" {
        return String::new();
    }
    if let Some(n @ 1..=12) = parse_integer(value) {
        if !value.contains("px") {
            return format!("columns-{n}");
        }
    }
    if value.contains("px") {
        if let Some(px) = parse_number(value) {
            return ladder(px, &COLUMN_WIDTHS)
                .map(str::to_string)
                .unwrap_or_else(|| format!("columns-[{}px]", format_number(px)));
        }
    }
    String::new()
}

/// `box-sizing`. `content-box` is elided.
pub fn box_sizing(value: &str) -> String {
    match value {
        "border-box" => "box-border".into(),
        _ => String::new(),
    }
}

/// `box-decoration-break`. `slice` is elided.
pub fn box_decoration_break(value: &str) -> String {
    match value {
        "clone" => "box-decoration-clone".into(),
        _ => String::new(),
    }
}

/// `isolation`. `auto` is elided.
pub fn isolation(value: &str) -> String {
    match value {
        "isolate" => "isolate".into(),
        _ => String::new(),
    }
}

/// `table-layout`. `auto` is elided.
pub fn table_layout(value: &str) -> String {
    match value {
        "fixed" => "table-fixed".into(),
        _ => String::new(),
    }
}

/// Whether a `display` value lays out as a table.
pub fn is_table(display: &str) -> bool {
    display == "table" || display == "inline-table"
}

/// `visibility`. `visible` is elided.
pub fn visibility(value: &str) -> String {
    match value {
        "hidden" => "invisible",
        "collapse" => "collapse",
        _ => "",
    }
    .to_string()
}

/// `contain`. `none` is elided.
pub fn contain(value: &str) -> String {
    match value {
        "content" | "strict" | "size" | "layout" | "paint" | "style" => format!("contain-{value}"),
        _ => String::new(),
    }
}

/// `content-visibility`. `visible` is elided.
pub fn content_visibility(value: &str) -> String {
    match value {
        "auto" => "content-auto",
        "hidden" => "content-hidden",
        _ => "",
    }
    .to_string()
}

/// `break-after` / `break-before` (`prefix` is `break-after` or
/// `break-before`). `auto` is elided.
pub fn break_around(value: &str, prefix: &str) -> String {
    match value {
        "avoid" | "all" | "avoid-page" | "page" | "left" | "right" | "column" => {
            format!("{prefix}-{value}")
        }
        _ => String::new(),
    }
}

/// `break-inside`. `auto` is elided.
pub fn break_inside(value: &str) -> String {
    match value {
        "avoid" | "avoid-page" | "avoid-column" => format!("break-inside-{value}"),
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
