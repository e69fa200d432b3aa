use std::cmp::Ordering;

use super::types::{Hull, HullCfg};
use crate::error::HullError;
use crate::geom2::{cross, direction, dist2, in_range, Point, COORD_LIMIT};

/// Move the lowest point (ties: smallest x) to index 0 and return it.
///
/// The first minimum wins, so the relative order of the other points only
/// changes by the single swap. Returns `None` for an empty slice.
pub fn select_pivot(points: &mut [Point]) -> Option<Point> {
    let idx = points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y, p.x))
        .map(|(i, _)| i)?;
    points.swap(0, idx);
    Some(points[0])
}

/// Comparator ordering points counter-clockwise around `pivot`.
///
/// `a` precedes `b` when `pivot → a → b` turns left; points on one ray
/// compare by squared distance, nearest first. All candidates lie in the
/// half-plane above the pivot (or on its right along the same row), which
/// makes this a total order.
pub fn polar_order(pivot: Point) -> impl Fn(&Point, &Point) -> Ordering {
    move |a, b| match cross(pivot, *a, *b).cmp(&0) {
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => dist2(pivot, *a).cmp(&dist2(pivot, *b)),
    }
}

/// Sort `points[1..]` by polar angle around `points[0]`.
pub fn sort_by_polar_angle(points: &mut [Point]) {
    if let Some((pivot, rest)) = points.split_first_mut() {
        rest.sort_unstable_by(polar_order(*pivot));
    }
}

/// Stack scan over pivot-first, angle-sorted points.
///
/// Returns the stack bottom to top. Before each push, the top is popped while
/// it and the entry below it form a non-left turn (`direction <= 0`) with the
/// incoming point.
pub fn scan(sorted: &[Point]) -> Vec<Point> {
    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in sorted {
        while stack.len() > 1 && direction(stack[stack.len() - 2], stack[stack.len() - 1], p) <= 0 {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

/// Hull of `points` with the default configuration. The input is left untouched.
pub fn graham_scan(points: &[Point]) -> Result<Hull, HullError> {
    graham_scan_with(points, HullCfg::default())
}

/// Hull of `points` computed on a working copy.
pub fn graham_scan_with(points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
    let mut work = points.to_vec();
    graham_scan_in_place(&mut work, cfg)
}

/// Hull of `points`, reordering the slice: the pivot ends at index 0 and the
/// remaining points are in polar-angle order.
///
/// Empty or out-of-range input is rejected before the slice is touched. A
/// `DegenerateHull` rejection happens after the scan, so the slice is already
/// reordered in that case.
pub fn graham_scan_in_place(points: &mut [Point], cfg: HullCfg) -> Result<Hull, HullError> {
    if let Some(p) = points.iter().find(|p| !in_range(**p)) {
        return Err(HullError::OverflowRisk {
            x: p.x,
            y: p.y,
            limit: COORD_LIMIT,
        });
    }
    let Some(pivot) = select_pivot(points) else {
        return Err(HullError::invalid("at least one point is required"));
    };
    sort_by_polar_angle(points);
    let hull = Hull::from_stack(scan(points));
    tracing::debug!(
        input = points.len(),
        vertices = hull.len(),
        kind = ?hull.kind(),
        pivot_x = pivot.x,
        pivot_y = pivot.y,
        "graham_scan"
    );
    if cfg.reject_degenerate && hull.is_degenerate() {
        return Err(HullError::DegenerateHull {
            kind: hull.kind(),
            vertices: hull.len(),
        });
    }
    Ok(hull)
}
