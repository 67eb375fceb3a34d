use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A coordinate that fell outside the normalized range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfRange {
    pub axis: Axis,
    pub value: f64,
}

/// A position in the normalized `[-1, 1] × [-1, 1]` display space.
///
/// Only constructible through [`Coordinates::new`], so every value in circulation
/// is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    x: f64,
    y: f64,
}

impl Coordinates {
    /// Validates x first, then y. NaN is rejected.
    pub fn new(x: f64, y: f64) -> Result<Self, OutOfRange> {
        if !(-1.0..=1.0).contains(&x) {
            return Err(OutOfRange { axis: Axis::X, value: x });
        }
        if !(-1.0..=1.0).contains(&y) {
            return Err(OutOfRange { axis: Axis::Y, value: y });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Half-open pixel rectangle: `[min.x, max.x) × [min.y, max.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> u32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> u32 {
        self.max.y - self.min.y
    }

    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Every pixel of the rectangle, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| Point::new(x, y)))
    }
}

/// The far edge the normalized space is stretched onto.
///
/// `x = 1` maps to `width` and `y = -1` maps to `height`. When the result must be a
/// readable pixel of an image, build the extent with [`Extent::max_index_of`] so the
/// far edge is the last valid zero-based index rather than the pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Extent of the last pixel index of an image that is `width × height` pixels.
    pub fn max_index_of(width: u32, height: u32) -> Self {
        Self {
            width: width.saturating_sub(1),
            height: height.saturating_sub(1),
        }
    }
}
