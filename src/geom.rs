use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};

use crate::error::{Dimension, GeometryError, GeometryResult};
use crate::point_set::PointSet;

/// Scalar used for grid coordinates: any signed primitive integer.
pub trait Coord: PrimInt + Signed + Hash + Debug + Display {}

impl<T> Coord for T where T: PrimInt + Signed + Hash + Debug + Display {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: Display> Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle anchored at its upper-left corner.
///
/// Coordinates grow to the right along `x` and *upward* along `y`, so the
/// "down" corners have a smaller `y` than the anchor:
///
/// ```text
///   up_left (x, y) ─────────── up_right (x + w, y)
///        │                            │
///   down_left (x, y - h) ──── down_right (x + w, y - h)
/// ```
///
/// Invariants, enforced by [`Rectangle::new`]:
/// - `width > 0` and `height > 0`
/// - every corner and the area are representable in `T`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawRectangle<T>",
    bound(deserialize = "T: Coord + Deserialize<'de>")
)]
pub struct Rectangle<T = i32> {
    x: T,
    y: T,
    width: T,
    height: T,
}

// Unvalidated wire shape; decoding goes through `Rectangle::new`.
#[derive(Deserialize)]
struct RawRectangle<T> {
    x: T,
    y: T,
    width: T,
    height: T,
}

impl<T: Coord> TryFrom<RawRectangle<T>> for Rectangle<T> {
    type Error = GeometryError;

    fn try_from(raw: RawRectangle<T>) -> GeometryResult<Self> {
        Rectangle::new(raw.x, raw.y, raw.width, raw.height)
    }
}

impl<T: Coord> TryFrom<(T, T, T, T)> for Rectangle<T> {
    type Error = GeometryError;

    fn try_from((x, y, width, height): (T, T, T, T)) -> GeometryResult<Self> {
        Rectangle::new(x, y, width, height)
    }
}

impl<T: Coord> Rectangle<T> {
    /// Builds a rectangle from its anchor and size.
    ///
    /// Width is validated before height, so a rectangle with both sides
    /// invalid reports the width. Positive sizes are still rejected with
    /// [`GeometryError::OutOfRange`] when `x + width`, `y - height` or
    /// `width * height` overflows `T`.
    pub fn new(x: T, y: T, width: T, height: T) -> GeometryResult<Self> {
        if width <= T::zero() {
            log::debug!("rejected rectangle at ({x}, {y}): width {width}");
            return Err(GeometryError::InvalidDimension(Dimension::Width));
        }
        if height <= T::zero() {
            log::debug!("rejected rectangle at ({x}, {y}): height {height}");
            return Err(GeometryError::InvalidDimension(Dimension::Height));
        }

        let representable = x.checked_add(&width).is_some()
            && y.checked_sub(&height).is_some()
            && width.checked_mul(&height).is_some();
        if !representable {
            log::debug!("rejected rectangle at ({x}, {y}): {width}x{height} overflows");
            return Err(GeometryError::OutOfRange);
        }

        Ok(Rectangle { x, y, width, height })
    }

    /// Caller guarantees `down_right` is strictly right of and below `up_left`
    /// and that both come from valid rectangles.
    pub(crate) fn from_corners_unchecked(up_left: Point<T>, down_right: Point<T>) -> Self {
        debug_assert!(down_right.x > up_left.x && down_right.y < up_left.y);
        Rectangle {
            x: up_left.x,
            y: up_left.y,
            width: down_right.x - up_left.x,
            height: up_left.y - down_right.y,
        }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn width(&self) -> T {
        self.width
    }

    #[inline]
    pub fn height(&self) -> T {
        self.height
    }

    #[inline]
    pub fn up_left(&self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn up_right(&self) -> Point<T> {
        Point::new(self.x + self.width, self.y)
    }

    #[inline]
    pub fn down_right(&self) -> Point<T> {
        Point::new(self.x + self.width, self.y - self.height)
    }

    #[inline]
    pub fn down_left(&self) -> Point<T> {
        Point::new(self.x, self.y - self.height)
    }

    /// The four corners. Always exactly four distinct points.
    pub fn vertices(&self) -> PointSet<T> {
        [self.up_left(), self.up_right(), self.down_right(), self.down_left()]
            .into_iter()
            .collect()
    }

    #[inline]
    pub fn area(&self) -> T {
        self.width * self.height
    }
}

impl<T: Display> Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}x{}]", self.x, self.y, self.width, self.height)
    }
}
