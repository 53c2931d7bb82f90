//! Tailscope Engine
//!
//! Translates one element's resolved styles into a space-separated string of
//! Tailwind-style utility classes. Every mapper is total: it reads a raw
//! resolved value and returns a token, or `""` when the value is the
//! property's default, unsupported, or absent. The converter runs the mappers
//! in a fixed order and drops the empty tokens.
//!
//! ```text
//! StyleSnapshot + ElementGeometry → Converter::convert() → "flex flex-col gap-4 ..."
//!                                 → Converter::inspect() → Inspection { classes, rows }
//! ```
//!
//! # Example
//!
//! ```
//! use tailscope_engine::convert;
//! use tailscope_style::{ElementGeometry, StyleSnapshot};
//!
//! let snapshot: StyleSnapshot = [
//!     ("display", "flex"),
//!     ("flexDirection", "column"),
//!     ("gap", "16px"),
//!     ("backgroundColor", "rgb(59, 130, 246)"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let classes = convert(&snapshot, ElementGeometry::new(200.0, 100.0));
//! assert_eq!(classes, "flex flex-col gap-4 bg-blue-500");
//! ```

pub mod background;
pub mod border;
pub mod color;
pub mod convert;
pub mod effects;
pub mod inspect;
pub mod interaction;
pub mod layout;
pub mod palette;
pub mod scale;
pub mod sizing;
pub mod spacing;
pub mod svg;
pub mod transform;
pub mod typography;

pub use convert::{convert, Converter, ConverterConfig};
pub use inspect::{inspect, Inspection, InspectionRow};
pub use layout::GridOverflow;
