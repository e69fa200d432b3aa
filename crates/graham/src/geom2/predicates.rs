use super::types::{Point, Turn, COORD_LIMIT};

/// Cross product `(a - o) × (b - o)`.
///
/// Positive when `o → a → b` turns counter-clockwise, negative when clockwise,
/// zero when the three points are collinear.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ax, ay) = (a.x as i128 - o.x as i128, a.y as i128 - o.y as i128);
    let (bx, by) = (b.x as i128 - o.x as i128, b.y as i128 - o.y as i128);
    ax * by - ay * bx
}

/// Turn direction of `a → b → c`: `> 0` counter-clockwise, `< 0` clockwise, `0` collinear.
#[inline]
pub fn direction(a: Point, b: Point, c: Point) -> i128 {
    cross(a, b, c)
}

#[inline]
pub fn turn(a: Point, b: Point, c: Point) -> Turn {
    Turn::from_cross(direction(a, b, c))
}

/// Squared Euclidean distance.
#[inline]
pub fn dist2(a: Point, b: Point) -> i128 {
    let dx = b.x as i128 - a.x as i128;
    let dy = b.y as i128 - a.y as i128;
    dx * dx + dy * dy
}

/// Whether both coordinates lie in `[-COORD_LIMIT, COORD_LIMIT]`.
#[inline]
pub fn in_range(p: Point) -> bool {
    (-COORD_LIMIT..=COORD_LIMIT).contains(&p.x) && (-COORD_LIMIT..=COORD_LIMIT).contains(&p.y)
}
