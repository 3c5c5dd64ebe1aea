//! Paired-resource linear program.
//!
//! Three decision variables stand for food-linked, medical-linked and
//! shelter-linked allocation. Each supply budget caps the sum of two of
//! them, so every variable sits in exactly two constraints:
//!
//! ```text
//! maximize  x0 + x1 + x2
//! s.t.      x0 + x1      <= food supplies
//!                x1 + x2 <= medical kits
//!           x0      + x2 <= shelters
//! ```
//!
//! The shape does not depend on how many regions the snapshot holds.

use data_spi::ResourceTotals;
use optimizer_spi::{Constraint, LinearProgram, OptimizationError, Result};

/// Number of decision variables.
pub const N_VARIABLES: usize = 3;

/// Constraint label, supply column and the two variables it couples.
pub const PAIRS: [(&str, [usize; 2]); 3] = [
    ("Food Supplies", [0, 1]),
    ("Medical Kits", [1, 2]),
    ("Shelters", [0, 2]),
];

/// Reject any negative aggregated supply, reporting the first in column order.
pub fn check_bounds(totals: &ResourceTotals) -> Result<()> {
    for ((resource, _), value) in PAIRS.iter().zip(totals.supply_bounds()) {
        if value < 0 {
            return Err(OptimizationError::NegativeBound {
                resource: resource.to_string(),
                value,
            });
        }
    }
    Ok(())
}

/// Build the program whose right-hand sides are the aggregated supplies.
pub fn paired_program(totals: &ResourceTotals) -> Result<LinearProgram> {
    check_bounds(totals)?;

    let program = PAIRS.iter().zip(totals.supply_bounds()).fold(
        LinearProgram::maximize(vec![1.0; N_VARIABLES]),
        |lp, ((label, pair), bound)| {
            let mut coefficients = vec![0.0; N_VARIABLES];
            for &v in pair {
                coefficients[v] = 1.0;
            }
            lp.subject_to(Constraint::new(label, coefficients, bound as f64))
        },
    );
    Ok(program)
}
