//! Convex hulls of integer point sets via the Graham scan.
//!
//! Layout
//! - `geom2`: integer points, orientation predicates, reproducible point clouds.
//! - `hull`: pivot selection, polar-angle sort, stack scan, and the `Hull` result.
//!
//! Arithmetic
//! - Coordinates are `i64`; every cross product and squared distance is
//!   evaluated in `i128`. Inputs must stay within `COORD_LIMIT` in absolute
//!   value, which keeps all intermediates exact. Entry points check this.

mod error;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point, Turn, COORD_LIMIT};
pub use hull::{
    graham_scan, graham_scan_in_place, graham_scan_with, Hull, HullCfg, HullError, HullKind,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_cloud, reference_points, CloudCfg, CloudShape, PointCount, ReplayToken,
    };
    pub use crate::geom2::{cross, direction, dist2, turn, Point, Turn, COORD_LIMIT};
    pub use crate::hull::{
        graham_scan, graham_scan_in_place, graham_scan_with, Hull, HullCfg, HullError, HullKind,
    };
}

