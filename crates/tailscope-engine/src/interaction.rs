//! Interaction, performance, scroll and misc UI mappers.

use crate::scale::arbitrary;

/// `cursor`. `auto` and `default` are elided.
pub fn cursor(value: &str) -> String {
    match value {
        "pointer" | "wait" | "text" | "move" | "not-allowed" | "grab" | "grabbing"
        | "zoom-in" | "zoom-out" | "help" | "crosshair" | "progress" => {
            format!("cursor-{value}")
        }
        _ => String::new(),
    }
}

/// `user-select`. `auto` is elided.
pub fn user_select(value: &str) -> String {
    match value {
        "none" | "text" | "all" => format!("select-{value}"),
        _ => String::new(),
    }
}

/// `pointer-events`. `auto` is elided.
pub fn pointer_events(value: &str) -> String {
    match value {
        "none" => "pointer-events-none".into(),
        _ => String::new(),
    }
}

/// `resize`. `none` is elided.
pub fn resize(value: &str) -> String {
    match value {
        "vertical" | "block" => "resize-y",
        "horizontal" | "inline" => "resize-x",
        "both" => "resize",
        _ => "",
    }
    .to_string()
}

/// `will-change`. `auto` is elided; unknown hints become arbitrary tokens.
pub fn will_change(value: &str) -> String {
    match value {
        "" | "auto" => String::new(),
        "scroll-position" => "will-change-scroll".into(),
        "contents" => "will-change-contents".into(),
        "transform" => "will-change-transform".into(),
        _ => format!("will-change-[{}]", arbitrary(value)),
    }
}

/// `clip-path`. `none` is elided.
pub fn clip_path(value: &str) -> String {
    match value {
        "" | "none" => String::new(),
        _ => format!("clip-[{}]", arbitrary(value)),
    }
}

/// `scroll-snap-type`. `none` is elided.
pub fn scroll_snap_type(value: &str) -> String {
    let mut parts = value.split_whitespace();
    let axis = match parts.next() {
        Some("x" | "inline") => "snap-x",
        Some("y" | "block") => "snap-y",
        Some("both") => "snap-both",
        _ => return String::new(),
    };
    match parts.next() {
        Some("mandatory") => format!("{axis} snap-mandatory"),
        _ => axis.to_string(),
    }
}

/// `scroll-snap-align`. `none` is elided.
pub fn scroll_snap_align(value: &str) -> String {
    match value {
        "start" | "end" | "center" => format!("snap-{value}"),
        _ => String::new(),
    }
}

/// `touch-action`. `auto` is elided.
pub fn touch_action(value: &str) -> String {
    match value {
        "none" | "pan-x" | "pan-y" | "pan-left" | "pan-right" | "pan-up" | "pan-down"
        | "pinch-zoom" | "manipulation" => format!("touch-{value}"),
        _ => String::new(),
    }
}

/// `overscroll-behavior` (`axis` is `None`, `Some("x")` or `Some("y")`).
/// `auto` is elided; a shorthand with equal axes counts as one value.
pub fn overscroll(value: &str, axis: Option<&str>) -> String {
    let prefix = match axis {
        Some(axis) => format!("overscroll-{axis}"),
        None => "overscroll".to_string(),
    };
    let parts: Vec<&str> = value.split_whitespace().collect();
    let value = match parts.as_slice() {
        [single] => *single,
        [x, y] if x == y => *x,
        _ => return String::new(),
    };
    match value {
        "contain" | "none" => format!("{prefix}-{value}"),
        _ => String::new(),
    }
}

/// `scroll-behavior`. `auto` is elided.
pub fn scroll_behavior(value: &str) -> String {
    match value {
        "smooth" => "scroll-smooth".into(),
        _ => String::new(),
    }
}

/// `appearance`. `none` is elided.
pub fn appearance(value: &str) -> String {
    match value {
        "auto" => "appearance-auto".into(),
        _ => String::new(),
    }
}

/// `forced-color-adjust`. `auto` is elided.
pub fn forced_color_adjust(value: &str) -> String {
    match value {
        "none" => "forced-color-adjust-none".into(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Pointer / selection
    // =========================================================================

    #[test]
    fn test_cursor() {
        assert_eq!(cursor("default"), "");
        assert_eq!(cursor("auto"), "");
        assert_eq!(cursor("pointer"), "cursor-pointer");
        assert_eq!(cursor("not-allowed"), "cursor-not-allowed");
        assert_eq!(cursor("url(x.cur), auto"), "");
    }

    #[test]
    fn test_selection_and_events() {
        assert_eq!(user_select("auto"), "");
        assert_eq!(user_select("none"), "select-none");
        assert_eq!(pointer_events("auto"), "");
        assert_eq!(pointer_events("none"), "pointer-events-none");
        assert_eq!(resize("none"), "");
        assert_eq!(resize("vertical"), "resize-y");
        assert_eq!(resize("both"), "resize");
    }

    // =========================================================================
    // Performance / geometry
    // =========================================================================

    #[test]
    fn test_will_change() {
        assert_eq!(will_change("auto"), "");
        assert_eq!(will_change("transform"), "will-change-transform");
        assert_eq!(will_change("scroll-position"), "will-change-scroll");
        assert_eq!(will_change("opacity, transform"), "will-change-[opacity,transform]");
    }

    #[test]
    fn test_clip_path() {
        assert_eq!(clip_path("none"), "");
        assert_eq!(clip_path("circle(50% at 50% 50%)"), "clip-[circle(50%_at_50%_50%)]");
    }

    // =========================================================================
    // Scroll / touch
    // =========================================================================

    #[test]
    fn test_scroll_snap() {
        assert_eq!(scroll_snap_type("none"), "");
        assert_eq!(scroll_snap_type("x mandatory"), "snap-x snap-mandatory");
        assert_eq!(scroll_snap_type("y proximity"), "snap-y");
        assert_eq!(scroll_snap_type("both"), "snap-both");
        assert_eq!(scroll_snap_align("none"), "");
        assert_eq!(scroll_snap_align("center"), "snap-center");
    }

    #[test]
    fn test_touch_and_overscroll() {
        assert_eq!(touch_action("auto"), "");
        assert_eq!(touch_action("manipulation"), "touch-manipulation");
        assert_eq!(overscroll("auto", None), "");
        assert_eq!(overscroll("contain", None), "overscroll-contain");
        assert_eq!(overscroll("none", Some("y")), "overscroll-y-none");
        assert_eq!(overscroll("contain contain", None), "overscroll-contain");
        assert_eq!(overscroll("auto contain", None), "");
        assert_eq!(scroll_behavior("auto"), "");
        assert_eq!(scroll_behavior("smooth"), "scroll-smooth");
    }

    #[test]
    fn test_ui_defaults_elided() {
        assert_eq!(appearance("none"), "");
        assert_eq!(appearance("auto"), "appearance-auto");
        assert_eq!(forced_color_adjust("auto"), "");
        assert_eq!(forced_color_adjust(""), "");
        assert_eq!(forced_color_adjust("none"), "forced-color-adjust-none");
    }
}
