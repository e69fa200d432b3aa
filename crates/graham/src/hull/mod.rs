//! Graham scan over integer points.
//!
//! Steps
//! 1. `select_pivot`: lowest point (ties: leftmost) is moved to index 0.
//! 2. `sort_by_polar_angle`: the rest is ordered counter-clockwise around the
//!    pivot; points on the same ray are ordered nearest first.
//! 3. `scan`: a stack keeps only strict left turns (`direction > 0`).
//! 4. `Hull`: the stack, read top to bottom, is the boundary in clockwise order.
//!
//! Degenerate inputs (one point, two points, all collinear) are not errors by
//! default: the mechanical result is returned and tagged through `HullKind`.
//! Set `HullCfg::reject_degenerate` to turn them into `HullError::DegenerateHull`.

mod scan;
mod types;

pub use crate::error::HullError;
pub use scan::{
    graham_scan, graham_scan_in_place, graham_scan_with, polar_order, scan, select_pivot,
    sort_by_polar_angle,
};
pub use types::{Hull, HullCfg, HullKind};

#[cfg(test)]
mod tests;
