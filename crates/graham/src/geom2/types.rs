//! Basic integer 2D types.
//!
//! - `Point`: integer point, no identity beyond its coordinates.
//! - `Turn`: orientation of an ordered triple.
//! - `COORD_LIMIT`: largest admissible absolute coordinate.

/// Integer point in the plane. Duplicates are legal and are never merged.
pub type Point = nalgebra::Point2<i64>;

/// Largest absolute coordinate accepted by the hull builder (2^62 - 1).
///
/// Coordinate differences stay below 2^63, so a squared distance (two squares)
/// stays below 2^127 and is exact in `i128`. Cross products are bounded by the
/// bounding-box area and fit as well.
pub const COORD_LIMIT: i64 = (1 << 62) - 1;

/// Orientation of three points `(a, b, c)`, read as "turning at `b`".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Left turn, positive cross product.
    CounterClockwise,
    /// Right turn, negative cross product.
    Clockwise,
    Collinear,
}

impl Turn {
    #[inline]
    pub fn from_cross(value: i128) -> Self {
        match value.signum() {
            1 => Turn::CounterClockwise,
            -1 => Turn::Clockwise,
            _ => Turn::Collinear,
        }
    }

    /// True for the turns the scan discards (`direction <= 0`).
    #[inline]
    pub fn is_non_left(self) -> bool {
        !matches!(self, Turn::CounterClockwise)
    }
}
