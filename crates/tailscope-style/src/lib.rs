//! Tailscope Style
//!
//! Input side of the inspector: a resolved style snapshot for one element,
//! its bounding geometry, and the leaf normalizers that turn raw resolved
//! values into canonical form (hex colors, bare numbers).
//!
//! # Example
//!
//! ```
//! use tailscope_style::{normalize_color, StyleSnapshot};
//!
//! let snapshot: StyleSnapshot = [("backgroundColor", "rgb(59, 130, 246)")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(normalize_color(snapshot.get("background-color")), "#3b82f6");
//! ```

pub mod color;
pub mod number;
pub mod snapshot;

pub use color::{normalize_color, TRANSPARENT};
pub use number::{format_number, parse_integer, parse_number, round_half_up};
pub use snapshot::{ElementGeometry, Side, StyleSnapshot};

/// Snapshot ingestion error with the position of the rejected declaration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Snapshot error at line {line}, declaration {declaration}: {message}")]
pub struct SnapshotError {
    pub message: String,
    pub line: usize,
    pub declaration: usize,
}
