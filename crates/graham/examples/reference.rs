//! Print the hull of the fixed ten-point reference input.
//!
//! Usage:
//!   cargo run -p graham --example reference

use graham::prelude::*;

fn main() -> Result<(), HullError> {
    let hull = graham_scan(&reference_points())?;
    print!("{hull}");
    Ok(())
}
