//! The converter: runs every mapper over a snapshot in a fixed order.
//!
//! ```text
//! StyleSnapshot + ElementGeometry → Converter::tokens() → Vec<token> → join(" ")
//! ```

use serde::{Deserialize, Serialize};
use tailscope_style::{ElementGeometry, StyleSnapshot};

use crate::layout::GridOverflow;
use crate::{
    background, border, color, effects, interaction, layout, sizing, spacing, svg, transform,
    typography,
};

/// Converter options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Handling of grid track counts outside `grid-cols-1..12` / `grid-rows-1..6`.
    pub grid_overflow: GridOverflow,
}

/// Maps a style snapshot to a utility class string.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

/// Token accumulator. Empty tokens are dropped on push.
#[derive(Default)]
struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    fn push(&mut self, token: String) {
        if !token.is_empty() {
            self.tokens.push(token);
        }
    }
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a snapshot into a space-joined class string (`""` when no
    /// token applies).
    pub fn convert(&self, snapshot: &StyleSnapshot, geometry: ElementGeometry) -> String {
        self.tokens(snapshot, geometry).join(" ")
    }

    /// The non-empty tokens in output order. A mapper that emits several
    /// utilities contributes one space-joined entry.
    pub fn tokens(&self, snapshot: &StyleSnapshot, geometry: ElementGeometry) -> Vec<String> {
        let mut list = ClassList::default();

        positioning(&mut list, snapshot);
        dimensions(&mut list, snapshot);
        self.display(&mut list, snapshot);
        box_spacing(&mut list, snapshot);
        text(&mut list, snapshot);
        colors(&mut list, snapshot);
        borders(&mut list, snapshot, geometry);
        effects_and_media(&mut list, snapshot);
        svg_paint(&mut list, snapshot);
        interaction_and_geometry(&mut list, snapshot);
        outline_and_decoration(&mut list, snapshot);
        misc_flow(&mut list, snapshot);
        svg_details(&mut list, snapshot);
        supplementary(&mut list, snapshot);

        log::debug!(
            target: "tailscope::convert",
            "{} properties -> {} tokens",
            snapshot.len(),
            list.tokens.len()
        );
        list.tokens
    }

    fn display(&self, list: &mut ClassList, s: &StyleSnapshot) {
        let display = s.get("display");
        list.push(layout::display(display));

        match display {
            "flex" => {
                list.push(layout::flex_direction(s.get("flex-direction")));
                list.push(layout::flex_wrap(s.get("flex-wrap")));
                list.push(layout::align_items(s.get("align-items")));
                list.push(layout::justify_content(s.get("justify-content")));
                list.push(spacing::gap(s.get("gap")));
            }
            "grid" => {
                let overflow = self.config.grid_overflow;
                list.push(layout::grid_columns(s.get("grid-template-columns"), overflow));
                list.push(layout::grid_rows(s.get("grid-template-rows"), overflow));
                list.push(layout::place_items(s.get("place-items")));
                list.push(layout::place_content(s.get("place-content")));
                list.push(spacing::gap(s.get("gap")));
            }
            _ => {}
        }

        list.push(layout::overflow(s.get("overflow")));
    }
}

/// Convert with the default configuration.
pub fn convert(snapshot: &StyleSnapshot, geometry: ElementGeometry) -> String {
    Converter::default().convert(snapshot, geometry)
}

/// Value of a property, falling back to its top-side longhand
/// (`border-width` → `border-top-width`).
fn with_top_fallback<'a>(s: &'a StyleSnapshot, property: &str, top: &str) -> &'a str {
    match s.get(property) {
        "" => s.get(top),
        value => value,
    }
}

/// `column-count`, or `column-width` when the count is left to the browser.
fn column_layout(s: &StyleSnapshot) -> &str {
    match s.get("column-count") {
        "" | "auto" => s.get("column-width"),
        count => count,
    }
}

/// Whether a computed width/height was authored relative to the viewport or
/// parent, as opposed to a resolved layout size.
fn is_relative_size(value: &str) -> bool {
    value.contains("vh") || value.contains("vw") || value.contains('%')
}

// =========================================================================
// Positioning / dimensions
// =========================================================================

fn positioning(list: &mut ClassList, s: &StyleSnapshot) {
    let position = s.get("position");
    list.push(layout::position(position));
    if layout::is_positioned(position) {
        list.push(layout::inset(
            s.get("top"),
            s.get("right"),
            s.get("bottom"),
            s.get("left"),
        ));
    }
    list.push(layout::z_index(s.get("z-index")));
}

fn dimensions(list: &mut ClassList, s: &StyleSnapshot) {
    let height = s.get("height");
    if is_relative_size(height) {
        list.push(sizing::size(height, "h"));
    }
    let width = s.get("width");
    if is_relative_size(width) {
        list.push(sizing::size(width, "w"));
    }
}

// =========================================================================
// Spacing / typography / color
// =========================================================================

fn box_spacing(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(spacing::padding(s));
    list.push(spacing::margin(s));
}

fn text(list: &mut ClassList, s: &StyleSnapshot) {
    let font_size = s.get("font-size");
    list.push(typography::font_size(font_size));
    list.push(typography::font_weight(s.get("font-weight")));
    list.push(typography::font_style(s.get("font-style")));
    list.push(typography::text_transform(s.get("text-transform")));
    list.push(typography::text_align(s.get("text-align")));
    list.push(typography::line_height(s.get("line-height"), font_size));
    list.push(typography::letter_spacing(s.get("letter-spacing")));
    list.push(typography::decoration_line(s.get("text-decoration-line")));
    list.push(typography::white_space(s.get("white-space")));
    list.push(typography::text_overflow(s.get("text-overflow")));
}

fn colors(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(color::text_color(s.get("color")));
    list.push(color::background_color(s.get("background-color")));
    list.push(background::background_size(s.get("background-size")));
    list.push(background::background_position(s.get("background-position")));
    list.push(background::background_repeat(s.get("background-repeat")));
}

// =========================================================================
// Borders / effects
// =========================================================================

fn borders(list: &mut ClassList, s: &StyleSnapshot, geometry: ElementGeometry) {
    let radius = with_top_fallback(s, "border-radius", "border-top-left-radius");
    list.push(border::border_radius(radius, geometry));
    list.push(border::border(
        with_top_fallback(s, "border-width", "border-top-width"),
        with_top_fallback(s, "border-color", "border-top-color"),
    ));
}

fn effects_and_media(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(effects::box_shadow(s.get("box-shadow")));
    list.push(effects::opacity(s.get("opacity")));
    list.push(effects::filter(s.get("filter")));
    list.push(transform::transform(s.get("transform")));

    list.push(sizing::object_fit(s.get("object-fit")));
    list.push(sizing::aspect_ratio(s.get("aspect-ratio")));

    list.push(interaction::cursor(s.get("cursor")));

    list.push(effects::backdrop_filter(s.get("backdrop-filter")));
    list.push(effects::mix_blend_mode(s.get("mix-blend-mode")));

    list.push(background::background_image(s.get("background-image")));
}

// =========================================================================
// SVG / interaction
// =========================================================================

fn svg_paint(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(color::fill(s.get("fill")));
    list.push(color::stroke(s.get("stroke")));
    list.push(svg::stroke_width(s.get("stroke-width")));
}

fn interaction_and_geometry(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(interaction::user_select(s.get("user-select")));
    list.push(interaction::pointer_events(s.get("pointer-events")));
    list.push(interaction::resize(s.get("resize")));
    list.push(interaction::will_change(s.get("will-change")));

    list.push(transform::transform_origin(s.get("transform-origin")));
    list.push(interaction::clip_path(s.get("clip-path")));
    list.push(interaction::scroll_snap_type(s.get("scroll-snap-type")));
    list.push(interaction::scroll_snap_align(s.get("scroll-snap-align")));
}

fn outline_and_decoration(list: &mut ClassList, s: &StyleSnapshot) {
    let outline = s.get("outline-style");
    if border::has_outline(outline) {
        list.push(border::outline_style(outline));
        list.push(border::outline_width(s.get("outline-width")));
        list.push(color::outline_color(s.get("outline-color")));
        list.push(border::outline_offset(s.get("outline-offset")));
    }

    if typography::has_decoration(s.get("text-decoration-line")) {
        list.push(color::decoration_color(
            s.get("text-decoration-color"),
            s.get("color"),
        ));
        list.push(typography::decoration_style(s.get("text-decoration-style")));
        list.push(typography::decoration_thickness(
            s.get("text-decoration-thickness"),
        ));
        list.push(typography::underline_offset(s.get("text-underline-offset")));
    }
}

// =========================================================================
// Flow, scroll and supplementary properties
// =========================================================================

fn misc_flow(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(layout::visibility(s.get("visibility")));
    list.push(typography::vertical_align(s.get("vertical-align")));
    list.push(typography::word_break(s.get("word-break")));
    list.push(interaction::touch_action(s.get("touch-action")));
    list.push(interaction::overscroll(s.get("overscroll-behavior"), None));
    list.push(interaction::overscroll(s.get("overscroll-behavior-x"), Some("x")));
    list.push(interaction::overscroll(s.get("overscroll-behavior-y"), Some("y")));
    list.push(interaction::scroll_behavior(s.get("scroll-behavior")));

    if layout::is_table(s.get("display")) {
        list.push(layout::table_layout(s.get("table-layout")));
    }

    list.push(layout::order(s.get("order")));
    list.push(color::caret_color(s.get("caret-color")));
    list.push(layout::columns(column_layout(s)));
    list.push(typography::hyphens(s.get("hyphens")));
    list.push(color::accent_color(s.get("accent-color")));
    list.push(spacing::scroll_box(s, "scroll-margin", "scroll-m"));
    list.push(spacing::scroll_box(s, "scroll-padding", "scroll-p"));
}

fn svg_details(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(svg::fill_opacity(s.get("fill-opacity")));
    list.push(svg::stroke_opacity(s.get("stroke-opacity")));
    list.push(svg::stroke_dasharray(s.get("stroke-dasharray")));
    list.push(svg::stroke_linecap(s.get("stroke-linecap")));
    list.push(svg::stroke_linejoin(s.get("stroke-linejoin")));
}

fn supplementary(list: &mut ClassList, s: &StyleSnapshot) {
    list.push(layout::isolation(s.get("isolation")));
    list.push(layout::contain(s.get("contain")));
    list.push(interaction::appearance(s.get("appearance")));
    list.push(layout::content_visibility(s.get("content-visibility")));
    list.push(interaction::forced_color_adjust(s.get("forced-color-adjust")));
    list.push(typography::text_wrap(s.get("text-wrap")));

    list.push(layout::break_around(s.get("break-after"), "break-after"));
    list.push(layout::break_around(s.get("break-before"), "break-before"));
    list.push(layout::break_inside(s.get("break-inside")));

    list.push(layout::float(s.get("float")));
    list.push(layout::clear(s.get("clear")));

    list.push(layout::box_decoration_break(s.get("box-decoration-break")));
    list.push(layout::box_sizing(s.get("box-sizing")));

    list.push(sizing::object_position(s.get("object-position")));

    list.push(typography::list_style_type(s.get("list-style-type")));
    list.push(typography::list_style_position(s.get("list-style-position")));

    list.push(layout::align_content(s.get("align-content")));
    list.push(layout::align_self(s.get("align-self")));
    list.push(layout::justify_self(s.get("justify-self")));
    list.push(layout::justify_items(s.get("justify-items")));
    list.push(layout::place_self(s.get("place-self")));

    list.push(layout::flex_grow(s.get("flex-grow")));
    list.push(layout::flex_shrink(s.get("flex-shrink")));
    list.push(sizing::flex_basis(s.get("flex-basis")));

    list.push(sizing::min_width(s.get("min-width")));
    list.push(sizing::max_width(s.get("max-width")));
    list.push(sizing::min_height(s.get("min-height")));
    list.push(sizing::max_height(s.get("max-height")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(pairs: &[(&str, &str)]) -> StyleSnapshot {
        pairs.iter().copied().collect()
    }

    fn run(pairs: &[(&str, &str)]) -> String {
        convert(&snapshot(pairs), ElementGeometry::new(200.0, 100.0))
    }

    // =========================================================================
    // Empty / defaults
    // =========================================================================

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(run(&[]), "");
    }

    #[test]
    fn test_initial_values_produce_nothing() {
        let classes = run(&[
            ("display", "block"),
            ("position", "static"),
            ("font-size", "16px"),
            ("font-weight", "400"),
            ("opacity", "1"),
            ("cursor", "default"),
            ("color", "rgb(0, 0, 0)"),
            ("background-color", "rgba(0, 0, 0, 0)"),
            ("outline-style", "none"),
            ("text-decoration-line", "none"),
            ("max-width", "none"),
            ("box-sizing", "content-box"),
            ("flex-grow", "0"),
            ("flex-shrink", "1"),
            ("overflow", "visible"),
            ("visibility", "visible"),
            ("z-index", "auto"),
            ("transform", "none"),
        ]);
        assert_eq!(classes, "");
    }

    // =========================================================================
    // Grouping order
    // =========================================================================

    #[test]
    fn test_positioning_precedes_layout() {
        let classes = run(&[
            ("display", "flex"),
            ("position", "absolute"),
            ("top", "0px"),
            ("right", "0px"),
            ("bottom", "0px"),
            ("left", "0px"),
            ("z-index", "10"),
        ]);
        assert_eq!(classes, "absolute inset-0 z-10 flex");
    }

    #[test]
    fn test_static_position_skips_inset() {
        assert_eq!(run(&[("position", "static"), ("top", "0px")]), "");
    }

    #[test]
    fn test_sizes_only_for_relative_values() {
        assert_eq!(run(&[("width", "200px"), ("height", "100px")]), "");
        assert_eq!(run(&[("width", "50%"), ("height", "100vh")]), "h-[100vh] w-1/2");
    }

    #[test]
    fn test_gap_only_for_flex_and_grid() {
        assert_eq!(run(&[("display", "block"), ("gap", "16px")]), "");
        assert_eq!(run(&[("display", "grid"), ("gap", "16px")]), "grid gap-4");
    }

    // =========================================================================
    // Config
    // =========================================================================

    #[test]
    fn test_grid_overflow_config() {
        let s = snapshot(&[
            ("display", "grid"),
            ("grid-template-columns", "repeat(16, minmax(0px, 1fr))"),
        ]);
        let geometry = ElementGeometry::default();
        assert_eq!(convert(&s, geometry), "grid");

        let converter = Converter::new(ConverterConfig {
            grid_overflow: GridOverflow::Arbitrary,
        });
        assert_eq!(
            converter.convert(&s, geometry),
            "grid grid-cols-[repeat(16,minmax(0px,1fr))]"
        );
    }

    #[test]
    fn test_config_serde() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"gridOverflow":"arbitrary"}"#).unwrap();
        assert_eq!(config.grid_overflow, GridOverflow::Arbitrary);
        let config: ConverterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    // =========================================================================
    // Conditional groups
    // =========================================================================

    #[test]
    fn test_border_needs_width_and_color() {
        assert_eq!(
            run(&[("border-width", "1px"), ("border-color", "rgb(229, 231, 235)")]),
            "border border-[#e5e7eb]"
        );
        assert_eq!(
            run(&[
                ("border-top-width", "2px"),
                ("border-top-color", "rgb(239, 68, 68)"),
            ]),
            "border-2 border-red-500"
        );
        assert_eq!(run(&[("border-color", "rgb(229, 231, 235)")]), "");
    }

    #[test]
    fn test_outline_only_when_styled() {
        assert_eq!(
            run(&[("outline-style", "none"), ("outline-width", "3px")]),
            ""
        );
        assert_eq!(
            run(&[
                ("outline-style", "solid"),
                ("outline-width", "2px"),
                ("outline-color", "rgb(59, 130, 246)"),
            ]),
            "outline outline-2 outline-blue-500"
        );
    }

    #[test]
    fn test_decoration_details_follow_line() {
        assert_eq!(
            run(&[
                ("text-decoration-line", "underline"),
                ("text-decoration-color", "rgb(239, 68, 68)"),
                ("text-underline-offset", "4px"),
            ]),
            "underline decoration-red-500 underline-offset-4"
        );
        assert_eq!(run(&[("text-underline-offset", "4px")]), "");
    }

    #[test]
    fn test_table_layout_only_for_tables() {
        assert_eq!(run(&[("table-layout", "fixed")]), "");
        assert_eq!(
            run(&[("display", "table"), ("table-layout", "fixed")]),
            "table-fixed"
        );
    }

    #[test]
    fn test_column_width_when_count_is_auto() {
        assert_eq!(
            run(&[("column-count", "auto"), ("column-width", "320px")]),
            "columns-md"
        );
        assert_eq!(
            run(&[("column-count", "3"), ("column-width", "320px")]),
            "columns-3"
        );
        assert_eq!(run(&[("column-count", "auto"), ("column-width", "auto")]), "");
    }

    #[test]
    fn test_tokens_keep_multi_token_entries() {
        let s = snapshot(&[("padding", "8px 16px"), ("filter", "blur(4px) grayscale(1)")]);
        let tokens = Converter::default().tokens(&s, ElementGeometry::default());
        assert_eq!(tokens, vec!["py-2 px-4", "blur-sm grayscale"]);
    }
}
