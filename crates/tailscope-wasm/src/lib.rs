//! WASM bindings for the tailscope inspector engine.
//!
//! The content script reads `getComputedStyle()` into a plain object of
//! property → string (camelCase or kebab-case keys) and passes it here
//! together with the element's bounding box. Bad input objects throw.

use tailscope_engine::{Converter, ConverterConfig, InspectionRow};
use tailscope_style::{ElementGeometry, StyleSnapshot};
use wasm_bindgen::prelude::*;

/// Convert a style object to a utility class string (`""` when nothing
/// applies).
#[wasm_bindgen]
pub fn convert(styles: JsValue, width: f64, height: f64) -> Result<String, JsError> {
    let snapshot = read_styles(styles)?;
    Ok(tailscope_engine::convert(&snapshot, geometry(width, height)))
}

/// Convert with an explicit converter config, e.g. `{ gridOverflow: "arbitrary" }`.
/// `undefined` or `null` selects the defaults.
#[wasm_bindgen]
pub fn convert_with(
    styles: JsValue,
    width: f64,
    height: f64,
    config: JsValue,
) -> Result<String, JsError> {
    let snapshot = read_styles(styles)?;
    let config = read_config(config)?;
    Ok(Converter::new(config).convert(&snapshot, geometry(width, height)))
}

/// Derived label rows for the overlay.
///
/// Returns an array of `{ label: string, value: string, copy?: string }`.
#[wasm_bindgen]
pub fn inspect(
    styles: JsValue,
    width: f64,
    height: f64,
    tag: &str,
    src: Option<String>,
) -> Result<JsValue, JsError> {
    let snapshot = read_styles(styles)?;
    let inspection =
        tailscope_engine::inspect(&snapshot, geometry(width, height), tag, src.as_deref());

    let rows = js_sys::Array::new();
    for row in &inspection.rows {
        rows.push(&row_object(row)?);
    }
    Ok(rows.into())
}

/// Normalize a resolved color to `#rrggbb` or `transparent`.
#[wasm_bindgen]
pub fn normalize_color(raw: &str) -> String {
    tailscope_style::normalize_color(raw)
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn read_styles(styles: JsValue) -> Result<StyleSnapshot, JsError> {
    serde_wasm_bindgen::from_value(styles)
        .map_err(|e| JsError::new(&format!("Invalid styles object: {e}")))
}

fn read_config(config: JsValue) -> Result<ConverterConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(ConverterConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid converter config: {e}")))
}

/// Bounding box from raw JS numbers; NaN, infinite and negative sizes read
/// as unknown (zero).
fn geometry(width: f64, height: f64) -> ElementGeometry {
    let side = |n: f64| if n.is_finite() && n > 0.0 { n } else { 0.0 };
    ElementGeometry::new(side(width), side(height))
}

fn row_object(row: &InspectionRow) -> Result<JsValue, JsError> {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"label".into(), &row.label.as_str().into())
        .map_err(|_| JsError::new("Failed to set label property"))?;
    js_sys::Reflect::set(&obj, &"value".into(), &row.value.as_str().into())
        .map_err(|_| JsError::new("Failed to set value property"))?;
    if let Some(copy) = &row.copy {
        js_sys::Reflect::set(&obj, &"copy".into(), &copy.as_str().into())
            .map_err(|_| JsError::new("Failed to set copy property"))?;
    }
    Ok(obj.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tailscope_engine::GridOverflow;

    // =========================================================================
    // Native tests (non-WASM): the pipeline behind each binding
    // =========================================================================

    fn native_convert(pairs: &[(&str, &str)], width: f64, height: f64) -> String {
        let snapshot: StyleSnapshot = pairs.iter().copied().collect();
        tailscope_engine::convert(&snapshot, geometry(width, height))
    }

    #[test]
    fn test_empty_styles() {
        assert_eq!(native_convert(&[], 0.0, 0.0), "");
    }

    #[test]
    fn test_camel_case_keys() {
        let classes = native_convert(
            &[("display", "flex"), ("justifyContent", "space-between")],
            100.0,
            20.0,
        );
        assert_eq!(classes, "flex justify-between");
    }

    #[test]
    fn test_geometry_sanitized() {
        assert_eq!(geometry(f64::NAN, -4.0), ElementGeometry::new(0.0, 0.0));
        assert_eq!(geometry(f64::INFINITY, 12.5), ElementGeometry::new(0.0, 12.5));
        assert_eq!(
            native_convert(&[("border-radius", "8px")], f64::NAN, f64::NAN),
            "rounded-lg"
        );
    }

    #[test]
    fn test_config_pipeline() {
        let snapshot: StyleSnapshot = [("display", "grid"), ("gridTemplateRows", "repeat(8, 1fr)")]
            .into_iter()
            .collect();
        let converter = Converter::new(ConverterConfig {
            grid_overflow: GridOverflow::Arbitrary,
        });
        assert_eq!(
            converter.convert(&snapshot, geometry(10.0, 10.0)),
            "grid grid-rows-[repeat(8,1fr)]"
        );
    }

    #[test]
    fn test_inspect_pipeline() {
        let snapshot: StyleSnapshot = [("objectFit", "cover")].into_iter().collect();
        let inspection = tailscope_engine::inspect(
            &snapshot,
            geometry(64.0, 64.0),
            "IMG",
            Some("https://x.dev/avatar.png"),
        );
        assert_eq!(inspection.value("Source"), Some("avatar.png"));
        assert_eq!(inspection.value("Object-Fit"), Some("cover"));
        assert_eq!(inspection.classes, "object-cover");
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("rgb(59, 130, 246)"), "#3b82f6");
        assert_eq!(normalize_color("rgba(0, 0, 0, 0)"), "transparent");
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_converts() {
        let first = native_convert(&[("opacity", "0.5")], 10.0, 10.0);
        let second = native_convert(&[("cursor", "pointer")], 10.0, 10.0);
        assert_eq!(first, "opacity-50");
        assert_eq!(second, "cursor-pointer");
    }
}
