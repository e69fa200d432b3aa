//! Integer 2D geometry used by the hull builder.
//!
//! Purpose
//! - One point type (`nalgebra::Point2<i64>`) and exact orientation predicates.
//! - A small deterministic point-cloud sampler for tests, benches and the CLI.
//!
//! Exactness
//! - Predicates widen to `i128` before multiplying, so they never round and
//!   never overflow for coordinates within `COORD_LIMIT`.

mod predicates;
pub mod rand;
mod types;

pub use predicates::{cross, direction, dist2, in_range, turn};
pub use types::{Point, Turn, COORD_LIMIT};
