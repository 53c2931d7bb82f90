//! Resolved style snapshot and element geometry.
//!
//! A snapshot is the read-only view of one element's resolved styles at one
//! instant. Keys are canonical kebab-case CSS property names; lookups of
//! absent properties return `""`, the same answer the browser gives for a
//! property it does not know.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SnapshotError;

/// Box side, in CSS shorthand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// Element bounding box in device-independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementGeometry {
    pub width: f64,
    pub height: f64,
}

impl ElementGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The shorter of the two dimensions.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Ordered mapping from CSS property name to its resolved value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct StyleSnapshot {
    entries: BTreeMap<String, String>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property. The name may be camelCase (`flexDirection`) or
    /// kebab-case (`flex-direction`); the value is trimmed.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries
            .insert(canonical_property(name), value.trim().to_string());
    }

    /// Resolved value of a property, or `""` when absent.
    pub fn get(&self, name: &str) -> &str {
        match self.entries.get(name) {
            Some(value) => value.as_str(),
            None => self
                .entries
                .get(&canonical_property(name))
                .map_or("", String::as_str),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve one side of a box property (`margin`, `padding`).
    ///
    /// Prefers the longhand (`padding-top`); falls back to expanding the
    /// shorthand with the 1/2/3/4-value rule.
    pub fn side(&self, property: &str, side: Side) -> &str {
        let longhand = format!("{property}-{}", side.as_str());
        let value = self.get(&longhand);
        if !value.is_empty() {
            return value;
        }
        expand_box_shorthand(self.get(property), side)
    }

    /// Parse CSS declaration text (`display: flex; gap: 16px`).
    ///
    /// Empty declarations are skipped and `!important` is dropped. A
    /// declaration with no `:` or with an empty property name is rejected.
    pub fn from_declarations(text: &str) -> Result<Self, SnapshotError> {
        let mut snapshot = Self::new();
        let mut line = 1;

        let declarations = split_top_level(text, |c| c == ';');
        for (index, declaration) in declarations.into_iter().enumerate() {
            let leading = declaration.len() - declaration.trim_start().len();
            let decl_line = line + declaration[..leading].matches('\n').count();
            line += declaration.matches('\n').count();

            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }

            let Some((name, value)) = declaration.split_once(':') else {
                return Err(SnapshotError {
                    message: format!("expected `property: value`, found `{declaration}`"),
                    line: decl_line,
                    declaration: index + 1,
                });
            };

            let name = name.trim();
            if name.is_empty() {
                return Err(SnapshotError {
                    message: "empty property name".into(),
                    line: decl_line,
                    declaration: index + 1,
                });
            }

            let value = value.trim();
            let value = value
                .strip_suffix("!important")
                .map_or(value, str::trim_end);
            snapshot.insert(name, value);
        }

        log::trace!(target: "tailscope::snapshot", "parsed {} declarations", snapshot.len());
        Ok(snapshot)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for StyleSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (name, value) in iter {
            snapshot.insert(name.as_ref(), value.as_ref());
        }
        snapshot
    }
}

impl From<BTreeMap<String, String>> for StyleSnapshot {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<StyleSnapshot> for BTreeMap<String, String> {
    fn from(snapshot: StyleSnapshot) -> Self {
        snapshot.entries
    }
}

/// Canonical kebab-case name for a property key.
///
/// `flexDirection` → `flex-direction`, `cssFloat` → `float`,
/// `WebkitLineClamp` → `-webkit-line-clamp`. Custom properties are kept.
pub fn canonical_property(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        return name.to_string();
    }
    if name == "cssFloat" {
        return "float".to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Pick one side out of a 1–4 value box shorthand.
fn expand_box_shorthand(value: &str, side: Side) -> &str {
    let parts = split_top_level(value, char::is_whitespace);
    let parts: Vec<&str> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    let index = match (parts.len(), side) {
        (0, _) => return "",
        (1, _) => 0,
        (2, Side::Top | Side::Bottom) => 0,
        (2, Side::Right | Side::Left) => 1,
        (3, Side::Top) => 0,
        (3, Side::Right | Side::Left) => 1,
        (3, Side::Bottom) => 2,
        (_, Side::Top) => 0,
        (_, Side::Right) => 1,
        (_, Side::Bottom) => 2,
        (_, Side::Left) => 3,
    };
    parts[index]
}

/// Split on `is_sep` outside parentheses and quotes.
fn split_top_level(text: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                c if depth == 0 && is_sep(c) => {
                    parts.push(&text[start..i]);
                    start = i + c.len_utf8();
                }
                _ => {}
            },
        }
    }
    parts.push(&text[start..]);
    parts
}
