//! Background size, position, repeat and image mappers.
//!
//! `background-image` is classified by content: a linear gradient maps its
//! direction onto one of eight `bg-gradient-to-*` tokens, a radial gradient
//! yields a fixed placeholder token, and `url(...)` layers are summarised by
//! file name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scale::arbitrary;

static GRADIENT_DIRECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"linear-gradient\(\s*(to\s+\w+(?:\s+\w+)?|-?[\d.]+deg)")
        .expect("valid gradient pattern")
});

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"url\(\s*["']?([^"')]+)["']?\s*\)"#).expect("valid url pattern"));

/// `background-size`. `auto` is elided.
pub fn background_size(value: &str) -> String {
    match value {
        "" | "auto" | "auto auto" => String::new(),
        "cover" => "bg-cover".into(),
        "contain" => "bg-contain".into(),
        _ if value.contains(',')
            || value.contains("vw")
            || value.contains("vh")
            || value.contains('%') =>
        {
            format!("bg-[size:{}]", underscored(value))
        }
        _ => String::new(),
    }
}

/// `background-position`. `0% 0%` is elided.
pub fn background_position(value: &str) -> String {
    let token = match value {
        "" | "0% 0%" | "left top" => return String::new(),
        "center" | "center center" | "50% 50%" => "bg-center",
        "top" | "top center" | "50% 0%" => "bg-top",
        "right" | "center right" | "100% 50%" => "bg-right",
        "bottom" | "bottom center" | "50% 100%" => "bg-bottom",
        "left" | "center left" | "0% 50%" => "bg-left",
        "right top" | "100% 0%" => "bg-right-top",
        "left bottom" | "0% 100%" => "bg-left-bottom",
        "right bottom" | "100% 100%" => "bg-right-bottom",
        _ => "",
    };
    if !token.is_empty() {
        return token.to_string();
    }
    if value.contains("calc") || value.contains('%') || value.contains("px") {
        return format!("bg-[position:{}]", underscored(value));
    }
    String::new()
}

fn underscored(value: &str) -> String {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// `background-repeat`. `repeat` is elided.
pub fn background_repeat(value: &str) -> String {
    match value {
        "no-repeat" => "bg-no-repeat",
        "repeat-x" => "bg-repeat-x",
        "repeat-y" => "bg-repeat-y",
        "round" => "bg-repeat-round",
        "space" => "bg-repeat-space",
        _ => "",
    }
    .to_string()
}

/// Direction token for a `linear-gradient` direction argument.
pub fn gradient_direction(direction: &str) -> String {
    let normalized = direction.split_whitespace().collect::<Vec<_>>().join(" ");
    let token = match normalized.as_str() {
        "to top" | "0deg" | "360deg" => "bg-gradient-to-t",
        "to top right" | "to right top" | "45deg" => "bg-gradient-to-tr",
        "to right" | "90deg" => "bg-gradient-to-r",
        "to bottom right" | "to right bottom" | "135deg" => "bg-gradient-to-br",
        "to bottom" | "180deg" => "bg-gradient-to-b",
        "to bottom left" | "to left bottom" | "225deg" => "bg-gradient-to-bl",
        "to left" | "270deg" => "bg-gradient-to-l",
        "to top left" | "to left top" | "315deg" => "bg-gradient-to-tl",
        _ => return format!("bg-[linear-gradient({},...)]", arbitrary(&normalized)),
    };
    token.to_string()
}

/// Last path segment of a URL, without query string.
pub fn url_file_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("image")
}

/// Target of every `url(...)` layer, in order.
pub fn image_urls(value: &str) -> Vec<&str> {
    URL.captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect()
}

/// `background-image`. `none` is elided.
pub fn background_image(value: &str) -> String {
    if value.is_empty() || value == "none" {
        return String::new();
    }

    if value.contains("linear-gradient") {
        return match GRADIENT_DIRECTION.captures(value) {
            Some(caps) => gradient_direction(&caps[1]),
            None => "bg-gradient-to-b".into(),
        };
    }

    if value.contains("radial-gradient") {
        return "bg-[radial-gradient(...)]".into();
    }

    if value.contains("url(") {
        let urls = image_urls(value);
        return match urls.as_slice() {
            [] => "bg-[url(...)]".into(),
            [single] => format!("bg-[url({})]", url_file_name(single)),
            many => format!("bg-[{}x_url(...)]", many.len()),
        };
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Size / position / repeat
    // =========================================================================

    #[test]
    fn test_background_size() {
        assert_eq!(background_size("auto"), "");
        assert_eq!(background_size("cover"), "bg-cover");
        assert_eq!(background_size("60vw, 60vw"), "bg-[size:60vw_60vw]");
        assert_eq!(background_size("50% auto"), "bg-[size:50%_auto]");
        assert_eq!(background_size("20px 20px"), "");
    }

    #[test]
    fn test_background_position() {
        assert_eq!(background_position("0% 0%"), "");
        assert_eq!(background_position("50% 50%"), "bg-center");
        assert_eq!(background_position("right bottom"), "bg-right-bottom");
        assert_eq!(background_position("10px 20px"), "bg-[position:10px_20px]");
        assert_eq!(background_position("inherit"), "");
    }

    #[test]
    fn test_background_repeat() {
        assert_eq!(background_repeat("repeat"), "");
        assert_eq!(background_repeat("no-repeat"), "bg-no-repeat");
        assert_eq!(background_repeat("round"), "bg-repeat-round");
    }

    // =========================================================================
    // Gradients
    // =========================================================================

    #[test]
    fn test_gradient_keywords() {
        assert_eq!(
            background_image("linear-gradient(to right, rgb(0, 0, 0), rgb(255, 255, 255))"),
            "bg-gradient-to-r"
        );
        assert_eq!(
            background_image("linear-gradient(to bottom right, red, blue)"),
            "bg-gradient-to-br"
        );
        assert_eq!(
            background_image("linear-gradient(to top left, red, blue)"),
            "bg-gradient-to-tl"
        );
    }

    #[test]
    fn test_gradient_angles() {
        assert_eq!(background_image("linear-gradient(90deg, red, blue)"), "bg-gradient-to-r");
        assert_eq!(background_image("linear-gradient(135deg, red, blue)"), "bg-gradient-to-br");
        assert_eq!(background_image("linear-gradient(180deg, red, blue)"), "bg-gradient-to-b");
    }

    #[test]
    fn test_gradient_custom_angle() {
        assert_eq!(
            background_image("linear-gradient(30deg, red, blue)"),
            "bg-[linear-gradient(30deg,...)]"
        );
    }

    #[test]
    fn test_gradient_without_direction() {
        assert_eq!(background_image("linear-gradient(red, blue)"), "bg-gradient-to-b");
    }

    #[test]
    fn test_radial_gradient() {
        assert_eq!(
            background_image("radial-gradient(circle, red, blue)"),
            "bg-[radial-gradient(...)]"
        );
    }

    // =========================================================================
    // URLs
    // =========================================================================

    #[test]
    fn test_single_url() {
        assert_eq!(
            background_image(r#"url("https://cdn.example.com/img/hero.png?v=2")"#),
            "bg-[url(hero.png)]"
        );
    }

    #[test]
    fn test_multiple_urls() {
        assert_eq!(
            background_image(r#"url("a/one.png"), url("b/two.png")"#),
            "bg-[2x_url(...)]"
        );
    }

    #[test]
    fn test_url_file_name() {
        assert_eq!(url_file_name("https://x.dev/a/b.svg"), "b.svg");
        assert_eq!(url_file_name("https://x.dev/a/"), "a");
        assert_eq!(url_file_name("logo.png"), "logo.png");
    }

    #[test]
    fn test_background_image_none() {
        assert_eq!(background_image("none"), "");
        assert_eq!(background_image(""), "");
        assert_eq!(background_image("image-set(x)"), "");
    }
}
