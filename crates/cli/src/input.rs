//! Point-set readers for the `hull` subcommand.
//!
//! - `.csv`: header row with integer columns `x` and `y` (read lazily with polars).
//! - `.json`: array of `[x, y]` pairs.

use anyhow::{anyhow, bail, Context, Result};
use graham::Point;
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let points = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path)?,
        Some("json") => read_json(path)?,
        other => bail!(
            "unsupported input extension {:?} for {} (expected .csv or .json)",
            other,
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), points = points.len(), "input_points");
    Ok(points)
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[i64; 2]> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = int_column(&df, "x", path)?;
    let ys = int_column(&df, "y", path)?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("{}: row {row} is missing a coordinate", path.display())),
        })
        .collect()
}

/// Integer column widened to `i64`. Float or text columns are rejected rather than truncated.
fn int_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<Option<i64>>> {
    let column = df.column(name)?;
    if !column.dtype().is_integer() {
        bail!(
            "{}: column {name} has type {}, expected integers",
            path.display(),
            column.dtype()
        );
    }
    let widened = column.cast(&DataType::Int64)?;
    let values = widened.i64()?.into_iter().collect();
    Ok(values)
}
