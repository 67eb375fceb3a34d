use crate::errors::{ScreenHueError, ScreenHueResult};
use crate::geometry::types::{Coordinates, Extent, Point, Rect};

/// Map a normalized coordinate onto `extent`.
///
/// `x = -1 → 0`, `x = 1 → extent.width`, `y = 1 → 0`, `y = -1 → extent.height`.
/// Fractional positions are truncated. The result can land on the far edge itself,
/// so pass [`Extent::max_index_of`] when the point will be read from an image.
pub fn pixel(coords: Coordinates, extent: Extent) -> Point {
    let x = (coords.x() + 1.0) * (extent.width as f64 / 2.0);
    let y = (-coords.y() + 1.0) * (extent.height as f64 / 2.0);
    Point::new(x as u32, y as u32)
}

/// Place a span of `size` around `center` on a single axis of length `extent`.
///
/// Returns the half-open `(start, end)`:
/// - sticking out below zero: `(0, size)`
/// - sticking out past `extent`: `(extent - size, extent)`
/// - otherwise centered as `(center - size / 2, center + size / 2)`
///
/// The centered form uses integer halves, so an odd `size` spans `size - 1` there.
/// A `size` larger than `extent` is clamped to `extent`.
pub fn clamp_span(center: u32, size: u32, extent: u32) -> (u32, u32) {
    let size = size.min(extent);
    let half = size / 2;
    if center < half {
        (0, size)
    } else if center.saturating_add(half) > extent {
        (extent - size, extent)
    } else {
        (center - half, center + half)
    }
}

/// Accept a box size of `1..=100` percent.
pub fn check_percent(percent: u32) -> ScreenHueResult<()> {
    if percent == 0 || percent > 100 {
        return Err(ScreenHueError::InvalidPercent(percent));
    }
    Ok(())
}

/// Sampling rectangle of `percent`% of the extent on each axis, centered on the
/// light's pixel and shifted back inside `[0, width] × [0, height]` per axis.
pub fn area(coords: Coordinates, extent: Extent, percent: u32) -> ScreenHueResult<Rect> {
    check_percent(percent)?;

    let bw = (extent.width as u64 * percent as u64 / 100) as u32;
    let bh = (extent.height as u64 * percent as u64 / 100) as u32;

    let center = pixel(coords, extent);
    let (x0, x1) = clamp_span(center.x, bw, extent.width);
    let (y0, y1) = clamp_span(center.y, bh, extent.height);

    // A one-pixel box has a zero half and collapses to nothing, so anything
    // under two pixels on either axis ends up here.
    let rect = Rect::new(Point::new(x0, y0), Point::new(x1, y1));
    if rect.is_empty() {
        return Err(ScreenHueError::DegenerateRegion {
            width: bw,
            height: bh,
        });
    }
    Ok(rect)
}
