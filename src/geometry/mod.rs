//! Geometry layer: normalized light coordinates to pixels and sampling rectangles.
//!
//! The normalized space is display-centered:
//!
//! ```text
//!           y = 1
//!             |
//!   x = -1 ---+--- x = 1
//!             |
//!           y = -1
//! ```
//!
//! Pixel rows grow downward, so the y axis is flipped on the way to pixel space.
pub mod mapping;
pub mod types;

pub use mapping::{area, check_percent, clamp_span, pixel};
pub use types::{Axis, Coordinates, Extent, OutOfRange, Point, Rect};
