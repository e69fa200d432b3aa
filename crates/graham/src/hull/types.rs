//! Result and configuration types of the hull builder.
//!
//! - `HullCfg`: policy knobs (degenerate handling).
//! - `HullKind`: point / segment / polygon classification of a result.
//! - `Hull`: the final scan stack plus read-only queries.

use std::fmt;

use crate::geom2::{cross, in_range, Point};

/// Hull builder configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    /// Report single-point and segment hulls as `HullError::DegenerateHull`
    /// instead of returning them.
    pub reject_degenerate: bool,
}

impl HullCfg {
    #[inline]
    pub fn strict() -> Self {
        Self {
            reject_degenerate: true,
        }
    }
}

/// Shape of a hull result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullKind {
    /// One distinct vertex (single point, or only coincident points).
    Point,
    /// Two distinct vertices (two points, or all points collinear).
    Segment,
    /// Three or more vertices forming a strictly convex polygon.
    Polygon,
}

/// Convex hull produced by the Graham scan.
///
/// Invariants:
/// - Non-empty; `ccw()[0]` is the pivot (lowest, then leftmost input point).
/// - For `Polygon`, every consecutive triple of `ccw()` (wrapping) turns
///   strictly counter-clockwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    stack: Vec<Point>,
    kind: HullKind,
}

impl Hull {
    pub(crate) fn from_stack(stack: Vec<Point>) -> Self {
        let kind = match stack.as_slice() {
            [] | [_] => HullKind::Point,
            [a, b] if a == b => HullKind::Point,
            [_, _] => HullKind::Segment,
            _ => HullKind::Polygon,
        };
        Self { stack, kind }
    }

    #[inline]
    pub fn kind(&self) -> HullKind {
        self.kind
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.kind != HullKind::Polygon
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Lowest (then leftmost) input point; always a hull vertex.
    #[inline]
    pub fn pivot(&self) -> Point {
        self.stack[0]
    }

    /// Vertices in construction order (bottom of the stack first): counter-clockwise from the pivot.
    #[inline]
    pub fn ccw(&self) -> &[Point] {
        &self.stack
    }

    /// Vertices in stack-pop order (top first): clockwise, ending at the pivot.
    pub fn pop_order(&self) -> impl DoubleEndedIterator<Item = &Point> + ExactSizeIterator + '_ {
        self.stack.iter().rev()
    }

    /// Consume into a vector in pop order.
    pub fn into_vertices(self) -> Vec<Point> {
        let mut v = self.stack;
        v.reverse();
        v
    }

    /// Twice the enclosed area (0 for degenerate hulls). Exact.
    pub fn twice_area(&self) -> i128 {
        let o = self.pivot();
        self.stack
            .windows(2)
            .skip(1)
            .map(|w| cross(o, w[0], w[1]))
            .sum()
    }

    /// Inclusive membership: boundary points count as contained.
    pub fn contains(&self, p: Point) -> bool {
        // The hull lies inside the admissible box, so anything outside it is outside the hull.
        if !in_range(p) {
            return false;
        }
        match self.kind {
            HullKind::Point => p == self.stack[0],
            HullKind::Segment => {
                let (a, b) = (self.stack[0], self.stack[1]);
                if cross(a, b, p) != 0 {
                    return false;
                }
                let along = (p.x as i128 - a.x as i128) * (p.x as i128 - b.x as i128)
                    + (p.y as i128 - a.y as i128) * (p.y as i128 - b.y as i128);
                along <= 0
            }
            HullKind::Polygon => {
                let n = self.stack.len();
                (0..n).all(|i| cross(self.stack[i], self.stack[(i + 1) % n], p) >= 0)
            }
        }
    }
}

/// Console report: a `Convex Hull` header, then one ` x: <x> y: <y>` line per vertex in pop order.
impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Convex Hull")?;
        for p in self.pop_order() {
            writeln!(f, " x: {} y: {}", p.x, p.y)?;
        }
        Ok(())
    }
}
