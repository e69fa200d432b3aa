//! Random integer point clouds (uniform square or disk + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of integer point sets used by the
//!   property tests, the benches, and the `random` CLI subcommand.
//!
//! Model
//! - Draw the point count, then draw coordinates uniformly from
//!   `[-radius, radius]²`; the disk shape rejects samples outside the circle.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::{Point, COORD_LIMIT};
use crate::error::HullError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest point count the sampler will draw.
pub const MAX_CLOUD_POINTS: usize = 1 << 24;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Region the coordinates are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    /// Axis-aligned square `[-radius, radius]²`.
    Square,
    /// Closed disk of the given radius around the origin.
    Disk,
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Half side length (square) or radius (disk). Must be in `1..=COORD_LIMIT`.
    pub radius: i64,
    pub shape: CloudShape,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(32),
            radius: 100,
            shape: CloudShape::Square,
        }
    }
}

impl CloudCfg {
    fn validate(&self) -> Result<(), HullError> {
        let requested = match self.count {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => min.max(max),
        };
        if requested > MAX_CLOUD_POINTS {
            return Err(HullError::invalid(format!(
                "point count {requested} exceeds {MAX_CLOUD_POINTS}"
            )));
        }
        if self.radius <= 0 {
            return Err(HullError::invalid("radius must be > 0"));
        }
        if self.radius > COORD_LIMIT {
            return Err(HullError::invalid(format!(
                "radius must be <= {COORD_LIMIT}"
            )));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer: neighbouring (seed, index) pairs must give unrelated clouds.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random integer point cloud. The same `(cfg, tok)` always yields the same points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, HullError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let r = cfg.radius;
    let r2 = (r as i128) * (r as i128);
    // `n` is bounded by `MAX_CLOUD_POINTS` after `validate`.
    let mut pts = Vec::with_capacity(n);
    while pts.len() < n {
        let x = rng.gen_range(-r..=r);
        let y = rng.gen_range(-r..=r);
        if cfg.shape == CloudShape::Disk && (x as i128) * (x as i128) + (y as i128) * (y as i128) > r2 {
            continue;
        }
        pts.push(Point::new(x, y));
    }
    Ok(pts)
}

/// The fixed ten-point input whose hull is `(0,3) (4,4) (4,1) (0,0)` in pop order.
pub fn reference_points() -> Vec<Point> {
    [
        (0, 3),
        (1, 1),
        (2, 2),
        (4, 4),
        (0, 0),
        (1, 2),
        (4, 1),
        (3, 3),
        (0, 2),
        (4, 2),
    ]
    .into_iter()
    .map(|(x, y)| Point::new(x, y))
    .collect()
}
