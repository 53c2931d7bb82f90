//! Derived per-property labels shown next to the class string.
//!
//! Each row is a short human label plus an optional CSS declaration for the
//! clipboard. Rows appear in a fixed order and only when their property
//! differs from its default.

use serde::Serialize;
use tailscope_style::{
    format_number, normalize_color, parse_number, round_half_up, ElementGeometry, Side,
    StyleSnapshot,
};

use crate::background::{image_urls, url_file_name};
use crate::convert::Converter;

/// One label row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionRow {
    pub label: String,
    pub value: String,
    /// CSS declaration copied to the clipboard, when the row is copyable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy: Option<String>,
}

impl InspectionRow {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            copy: None,
        }
    }

    pub fn with_copy(mut self, copy: impl Into<String>) -> Self {
        self.copy = Some(copy.into());
        self
    }
}

/// The converter output together with its label rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub classes: String,
    pub rows: Vec<InspectionRow>,
}

impl Inspection {
    /// Value of the first row with `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// Inspect with the default converter configuration.
pub fn inspect(
    snapshot: &StyleSnapshot,
    geometry: ElementGeometry,
    tag: &str,
    src: Option<&str>,
) -> Inspection {
    Converter::default().inspect(snapshot, geometry, tag, src)
}

impl Converter {
    /// Class string plus derived label rows for one element. `src` is the
    /// resolved image URL of `<img>` elements.
    pub fn inspect(
        &self,
        snapshot: &StyleSnapshot,
        geometry: ElementGeometry,
        tag: &str,
        src: Option<&str>,
    ) -> Inspection {
        let tag = tag.to_ascii_lowercase();
        let mut rows = Vec::new();

        identity(&mut rows, geometry, &tag, src);
        box_model(&mut rows, snapshot);
        effects(&mut rows, snapshot);
        motion(&mut rows, snapshot);
        spacing(&mut rows, snapshot);
        typography(&mut rows, snapshot);
        if tag == "img" {
            image(&mut rows, snapshot);
        }
        layout_details(&mut rows, snapshot);
        misc(&mut rows, snapshot);

        Inspection {
            classes: self.convert(snapshot, geometry),
            rows,
        }
    }
}

/// Present and different from `default`.
fn differs(value: &str, default: &str) -> bool {
    !value.is_empty() && value != default
}

/// Truncate to `keep` characters plus `...` when longer than `limit`.
fn shorten(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() > limit {
        let head: String = text.chars().take(keep).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn first_item(list: &str) -> &str {
    list.split(',').next().unwrap_or("").trim()
}

// =========================================================================
// Element / box
// =========================================================================

fn identity(rows: &mut Vec<InspectionRow>, geometry: ElementGeometry, tag: &str, src: Option<&str>) {
    rows.push(InspectionRow::new("Element", format!("<{tag}>")));
    rows.push(InspectionRow::new(
        "Size",
        format!(
            "{} x {} px",
            format_number(round_half_up(geometry.width)),
            format_number(round_half_up(geometry.height))
        ),
    ));

    if tag != "img" {
        return;
    }
    if let Some(src) = src.filter(|s| !s.is_empty()) {
        let file = src.rsplit('/').next().filter(|f| !f.is_empty()).unwrap_or(src);
        rows.push(InspectionRow::new("Source", shorten(file, 25, 22)).with_copy(src));
    }
}

fn box_model(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    let display = s.get("display");
    let position = s.get("position");
    let value = if differs(position, "static") {
        format!("{display} ({position})")
    } else {
        display.to_string()
    };
    rows.push(InspectionRow::new("Display", value.trim()));

    let overflow = s.get("overflow");
    if differs(overflow, "visible") {
        rows.push(InspectionRow::new("Overflow", overflow));
    }
    let z_index = s.get("z-index");
    if differs(z_index, "auto") {
        rows.push(InspectionRow::new("Z-Index", z_index));
    }
    let radius = s.get("border-radius");
    rows.push(InspectionRow::new(
        "Radius",
        if differs(radius, "0px") { radius } else { "-" },
    ));
}

fn effects(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    let shadow = s.get("box-shadow");
    if differs(shadow, "none") {
        rows.push(InspectionRow::new("Shadow", "On").with_copy(format!("box-shadow: {shadow};")));
    } else {
        rows.push(InspectionRow::new("Shadow", "-"));
    }

    if let Some(opacity) = parse_number(s.get("opacity")).filter(|o| *o < 1.0) {
        rows.push(InspectionRow::new(
            "Opacity",
            format!("{}%", format_number(round_half_up(opacity * 100.0))),
        ));
    }

    for (label, property) in [("Transform", "transform"), ("Filter", "filter")] {
        let value = s.get(property);
        if differs(value, "none") {
            rows.push(InspectionRow::new(label, "Yes").with_copy(format!("{property}: {value};")));
        }
    }
}

fn motion(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    let name = s.get("animation-name");
    if differs(name, "none") {
        let duration = s.get("animation-duration");
        let declaration = [
            name,
            duration,
            s.get("animation-timing-function"),
            s.get("animation-delay"),
            s.get("animation-iteration-count"),
            s.get("animation-direction"),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
        rows.push(
            InspectionRow::new("Animation", format!("{name} ({duration})"))
                .with_copy(format!("animation: {declaration};")),
        );
    }

    let duration = s.get("transition-duration");
    if parse_number(duration).is_some_and(|d| d > 0.0) {
        let property = s.get("transition-property");
        let declaration = [
            property,
            duration,
            s.get("transition-timing-function"),
            s.get("transition-delay"),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
        rows.push(
            InspectionRow::new(
                "Transition",
                format!("{} ({})", first_item(property), first_item(duration)),
            )
            .with_copy(format!("transition: {declaration};")),
        );
    }
}

// =========================================================================
// Spacing / type
// =========================================================================

/// Shorthand form of a box property, `-` when every side is zero or absent.
fn box_summary(s: &StyleSnapshot, property: &str) -> String {
    let sides = Side::ALL.map(|side| s.side(property, side));
    if sides
        .iter()
        .all(|side| side.is_empty() || parse_number(side) == Some(0.0))
    {
        return "-".into();
    }
    let sides = sides.map(|side| if side.is_empty() { "0px" } else { side });
    let [top, right, bottom, left] = sides;
    if top == right && top == bottom && top == left {
        top.to_string()
    } else if top == bottom && right == left {
        format!("{top} {right}")
    } else {
        sides.join(" ")
    }
}

fn spacing(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    rows.push(InspectionRow::new("Padding", box_summary(s, "padding")));
    rows.push(InspectionRow::new("Margin", box_summary(s, "margin")));
}

fn typography(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    let family = first_item(s.get("font-family")).replace(['"', '\''], "");
    let family = if family.is_empty() { "System".to_string() } else { family };
    rows.push(InspectionRow::new("Font", family));

    if let Some(size) = parse_number(s.get("font-size")) {
        let weight = match s.get("font-weight") {
            "" => "400",
            weight => weight,
        };
        rows.push(InspectionRow::new(
            "Type",
            format!("{}px / {weight}", format_number(round_half_up(size))),
        ));
    }

    let line_height = s.get("line-height");
    if differs(line_height, "normal") {
        rows.push(InspectionRow::new("Line-H", line_height));
    }

    let color = s.get("color");
    if !color.is_empty() {
        rows.push(InspectionRow::new("Color", normalize_color(color)));
    }
}

fn image(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    let fit = match s.get("object-fit") {
        "" => "fill",
        fit => fit,
    };
    rows.push(InspectionRow::new("Object-Fit", fit));
    let aspect = s.get("aspect-ratio");
    if differs(aspect, "auto") {
        rows.push(InspectionRow::new("Aspect", aspect));
    }
}

// =========================================================================
// Layout / misc
// =========================================================================

/// Readable summary of a `background-image` value.
pub fn background_summary(value: &str) -> String {
    if value.contains("linear-gradient") {
        return "linear-gradient(...)".into();
    }
    if value.contains("radial-gradient") {
        return "radial-gradient(...)".into();
    }
    if value.contains("url(") {
        let urls = image_urls(value);
        return match urls.as_slice() {
            [] => "image".into(),
            [single] => url_file_name(single).chars().take(20).collect(),
            many => format!("{} images", many.len()),
        };
    }
    "custom".into()
}

fn layout_details(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    let cursor = s.get("cursor");
    if differs(cursor, "auto") && cursor != "default" {
        rows.push(InspectionRow::new("Cursor", cursor));
    }

    if s.get("display") == "grid" {
        for (label, property) in [
            ("Grid Cols", "grid-template-columns"),
            ("Grid Rows", "grid-template-rows"),
        ] {
            let value = s.get(property);
            if differs(value, "none") {
                rows.push(InspectionRow::new(label, "Yes").with_copy(format!("{property}: {value};")));
            }
        }
    }

    let backdrop = s.get("backdrop-filter");
    if differs(backdrop, "none") {
        rows.push(
            InspectionRow::new("Backdrop", "Yes").with_copy(format!("backdrop-filter: {backdrop};")),
        );
    }
    let blend = s.get("mix-blend-mode");
    if differs(blend, "normal") {
        rows.push(InspectionRow::new("Blend", blend));
    }
    let image = s.get("background-image");
    if differs(image, "none") {
        rows.push(
            InspectionRow::new("BG Image", background_summary(image))
                .with_copy(format!("background-image: {image};")),
        );
    }
    let clip = s.get("clip-path");
    if differs(clip, "none") {
        rows.push(InspectionRow::new("Clip Path", "Yes").with_copy(format!("clip-path: {clip};")));
    }
    if differs(s.get("scroll-snap-type"), "none") || differs(s.get("scroll-snap-align"), "none") {
        rows.push(InspectionRow::new("Scroll", "Snap"));
    }
    let will_change = s.get("will-change");
    if differs(will_change, "auto") {
        rows.push(InspectionRow::new("Optimize", will_change));
    }

    let user_select = s.get("user-select");
    let pointer_events = s.get("pointer-events");
    if pointer_events == "none" {
        rows.push(InspectionRow::new("Interact", "No Pointer"));
    } else if differs(user_select, "auto") {
        rows.push(InspectionRow::new("Interact", user_select));
    }

    let outline_style = s.get("outline-style");
    let outline_width = s.get("outline-width");
    if differs(outline_style, "none") && parse_number(outline_width).is_some_and(|w| w > 0.0) {
        let declaration = [outline_width, outline_style, s.get("outline-color")]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        rows.push(
            InspectionRow::new("Outline", format!("{outline_width} {outline_style}"))
                .with_copy(format!("outline: {declaration};")),
        );
    }
}

fn misc(rows: &mut Vec<InspectionRow>, s: &StyleSnapshot) {
    let plain = [
        ("Visibility", "visibility", "visible"),
        ("Columns", "column-count", "auto"),
        ("Touch", "touch-action", "auto"),
    ];
    for (label, property, default) in plain {
        let value = s.get(property);
        if differs(value, default) {
            rows.push(InspectionRow::new(label, value));
        }
    }

    if s.get("scroll-behavior") == "smooth" {
        rows.push(InspectionRow::new("Scroll", "Smooth"));
    }

    let plain = [
        ("Order", "order", "0"),
        ("Float", "float", "none"),
    ];
    for (label, property, default) in plain {
        let value = s.get(property);
        if differs(value, default) {
            rows.push(InspectionRow::new(label, value));
        }
    }

    if s.get("isolation") == "isolate" {
        rows.push(InspectionRow::new("Isolation", "isolate"));
    }
    let list = s.get("list-style-type");
    if differs(list, "none") && list != "disc" {
        rows.push(InspectionRow::new("List", list));
    }

    if s.get("display") == "flex" {
        let grow = s.get("flex-grow");
        if differs(grow, "0") {
            rows.push(InspectionRow::new("Grow", grow));
        }
        let shrink = s.get("flex-shrink");
        if differs(shrink, "1") {
            rows.push(InspectionRow::new("Shrink", shrink));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(pairs: &[(&str, &str)]) -> StyleSnapshot {
        pairs.iter().copied().collect()
    }

    fn labels(inspection: &Inspection) -> Vec<&str> {
        inspection.rows.iter().map(|row| row.label.as_str()).collect()
    }

    // =========================================================================
    // Always-present rows
    // =========================================================================

    #[test]
    fn test_minimal_rows() {
        let inspection = inspect(
            &StyleSnapshot::new(),
            ElementGeometry::new(120.4, 39.6),
            "DIV",
            None,
        );
        assert_eq!(
            labels(&inspection),
            vec!["Element", "Size", "Display", "Radius", "Shadow", "Padding", "Margin", "Font"]
        );
        assert_eq!(inspection.value("Element"), Some("<div>"));
        assert_eq!(inspection.value("Size"), Some("120 x 40 px"));
        assert_eq!(inspection.value("Radius"), Some("-"));
        assert_eq!(inspection.value("Font"), Some("System"));
        assert_eq!(inspection.classes, "");
    }

    #[test]
    fn test_display_with_position() {
        let s = snapshot(&[("display", "flex"), ("position", "relative")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Display"), Some("flex (relative)"));

        let s = snapshot(&[("display", "block"), ("position", "static")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Display"), Some("block"));
    }

    // =========================================================================
    // Typography / spacing
    // =========================================================================

    #[test]
    fn test_font_rows() {
        let s = snapshot(&[
            ("font-family", "\"Inter\", sans-serif"),
            ("font-size", "14.4px"),
            ("font-weight", "600"),
            ("line-height", "20px"),
            ("color", "rgb(17, 24, 39)"),
        ]);
        let inspection = inspect(&s, ElementGeometry::default(), "p", None);
        assert_eq!(inspection.value("Font"), Some("Inter"));
        assert_eq!(inspection.value("Type"), Some("14px / 600"));
        assert_eq!(inspection.value("Line-H"), Some("20px"));
        assert_eq!(inspection.value("Color"), Some("#111827"));
    }

    #[test]
    fn test_box_summary() {
        let s = snapshot(&[("padding", "8px 16px"), ("margin", "0px")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Padding"), Some("8px 16px"));
        assert_eq!(inspection.value("Margin"), Some("-"));

        let s = snapshot(&[("padding-top", "4px")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Padding"), Some("4px 0px 0px 0px"));
    }

    // =========================================================================
    // Copyable rows
    // =========================================================================

    #[test]
    fn test_shadow_copy() {
        let s = snapshot(&[("box-shadow", "rgba(0, 0, 0, 0.1) 0px 1px 2px 0px")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        let row = inspection.rows.iter().find(|r| r.label == "Shadow").unwrap();
        assert_eq!(row.value, "On");
        assert_eq!(
            row.copy.as_deref(),
            Some("box-shadow: rgba(0, 0, 0, 0.1) 0px 1px 2px 0px;")
        );
        assert_eq!(inspection.classes, "shadow-sm");
    }

    #[test]
    fn test_transition_row() {
        let s = snapshot(&[
            ("transition-property", "opacity, transform"),
            ("transition-duration", "0.2s, 0.3s"),
            ("transition-timing-function", "ease"),
            ("transition-delay", "0s"),
        ]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        let row = inspection.rows.iter().find(|r| r.label == "Transition").unwrap();
        assert_eq!(row.value, "opacity (0.2s)");
        assert_eq!(
            row.copy.as_deref(),
            Some("transition: opacity, transform 0.2s, 0.3s ease 0s;")
        );
    }

    #[test]
    fn test_zero_transition_hidden() {
        let s = snapshot(&[("transition-duration", "0s")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Transition"), None);
    }

    // =========================================================================
    // Images
    // =========================================================================

    #[test]
    fn test_image_rows() {
        let s = snapshot(&[("object-fit", "cover"), ("aspect-ratio", "16 / 9")]);
        let src = "https://cdn.example.com/media/a-very-long-hero-image-name-2024.webp";
        let inspection = inspect(&s, ElementGeometry::default(), "IMG", Some(src));
        let row = inspection.rows.iter().find(|r| r.label == "Source").unwrap();
        assert_eq!(row.value, "a-very-long-hero-image...");
        assert_eq!(row.copy.as_deref(), Some(src));
        assert_eq!(inspection.value("Object-Fit"), Some("cover"));
        assert_eq!(inspection.value("Aspect"), Some("16 / 9"));
    }

    #[test]
    fn test_source_only_for_images() {
        let inspection = inspect(
            &StyleSnapshot::new(),
            ElementGeometry::default(),
            "div",
            Some("https://x.dev/a.png"),
        );
        assert_eq!(inspection.value("Source"), None);
        assert_eq!(inspection.value("Object-Fit"), None);
    }

    #[test]
    fn test_background_summary() {
        assert_eq!(background_summary("linear-gradient(red, blue)"), "linear-gradient(...)");
        assert_eq!(
            background_summary(r#"url("https://x.dev/img/photo-of-the-mountains.jpg")"#),
            "photo-of-the-mountai"
        );
        assert_eq!(background_summary(r#"url("a.png"), url("b.png")"#), "2 images");
        assert_eq!(background_summary("image-set(x)"), "custom");
    }

    // =========================================================================
    // Conditional rows
    // =========================================================================

    #[test]
    fn test_interact_row() {
        let s = snapshot(&[("pointer-events", "none"), ("user-select", "none")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Interact"), Some("No Pointer"));

        let s = snapshot(&[("pointer-events", "auto"), ("user-select", "all")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Interact"), Some("all"));
    }

    #[test]
    fn test_flex_item_rows_only_in_flex() {
        let s = snapshot(&[("display", "flex"), ("flex-grow", "1"), ("flex-shrink", "0")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Grow"), Some("1"));
        assert_eq!(inspection.value("Shrink"), Some("0"));

        let s = snapshot(&[("display", "block"), ("flex-grow", "1")]);
        let inspection = inspect(&s, ElementGeometry::default(), "div", None);
        assert_eq!(inspection.value("Grow"), None);
    }

    #[test]
    fn test_rows_serialize_without_empty_copy() {
        let row = InspectionRow::new("Z-Index", "10");
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"label":"Z-Index","value":"10"}"#
        );
    }
}
