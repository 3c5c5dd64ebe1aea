//! Dense two-phase simplex solver.
//!
//! Rows with a negative bound are negated and given an artificial
//! variable. Phase one drives the artificials to zero, phase two optimises
//! the real objective. Bland's rule picks entering and leaving variables so
//! degenerate programs cannot cycle.

use optimizer_api::OptimizerConfig;
use optimizer_spi::{LinearProgram, LpSolver, OptimizationError, Result, Solution};

/// Tableau simplex for small dense programs.
#[derive(Debug, Clone)]
pub struct SimplexSolver {
    tolerance: f64,
    max_iterations: usize,
}

impl SimplexSolver {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    pub fn from_config(config: &OptimizerConfig) -> Self {
        Self::new(config.tolerance, config.max_iterations)
    }
}

impl Default for SimplexSolver {
    fn default() -> Self {
        Self::from_config(&OptimizerConfig::default())
    }
}

/// Constraint rows (coefficients then right-hand side) and the basic
/// column of each row.
struct Tableau {
    rows: Vec<Vec<f64>>,
    basis: Vec<usize>,
    width: usize,
}

impl Tableau {
    fn rhs(&self, row: usize) -> f64 {
        self.rows[row][self.width]
    }

    fn reduced_cost(&self, cost: &[f64], col: usize) -> f64 {
        let basic: f64 = self
            .rows
            .iter()
            .zip(&self.basis)
            .map(|(row, &b)| cost[b] * row[col])
            .sum();
        cost[col] - basic
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let p = self.rows[row][col];
        for v in self.rows[row].iter_mut() {
            *v /= p;
        }
        let pivot_row = self.rows[row].clone();
        for (i, r) in self.rows.iter_mut().enumerate() {
            let factor = r[col];
            if i == row || factor == 0.0 {
                continue;
            }
            for (v, pv) in r.iter_mut().zip(&pivot_row) {
                *v -= factor * pv;
            }
        }
        self.basis[row] = col;
    }

    /// Leaving row by minimum ratio, ties to the lowest basic column.
    fn leaving_row(&self, col: usize, tol: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, row) in self.rows.iter().enumerate() {
            let a = row[col];
            if a <= tol {
                continue;
            }
            let ratio = self.rhs(i) / a;
            best = match best {
                None => Some((i, ratio)),
                Some((_, r)) if ratio < r - tol => Some((i, ratio)),
                Some((j, r)) if (ratio - r).abs() <= tol && self.basis[i] < self.basis[j] => {
                    Some((i, ratio))
                }
                keep => keep,
            };
        }
        best.map(|(i, _)| i)
    }

    /// Pivot until no column below `eligible` improves `cost`.
    fn optimize(
        &mut self,
        cost: &[f64],
        eligible: usize,
        tol: f64,
        iterations: &mut usize,
        max_iterations: usize,
    ) -> Result<()> {
        loop {
            let Some(col) = (0..eligible).find(|&j| self.reduced_cost(cost, j) > tol) else {
                return Ok(());
            };
            if *iterations >= max_iterations {
                return Err(OptimizationError::IterationLimit {
                    iterations: max_iterations,
                });
            }
            let row = self
                .leaving_row(col, tol)
                .ok_or(OptimizationError::Unbounded)?;
            self.pivot(row, col);
            *iterations += 1;
        }
    }
}

impl LpSolver for SimplexSolver {
    fn solve(&self, program: &LinearProgram) -> Result<Solution> {
        program.validate()?;

        let n = program.n_variables();
        let m = program.n_constraints();
        let negative: Vec<usize> = (0..m)
            .filter(|&i| program.constraints[i].bound < 0.0)
            .collect();
        let k = negative.len();

        // Columns: decision variables, one slack per row, then artificials
        let width = n + m + k;
        let mut rows = Vec::with_capacity(m);
        let mut basis = Vec::with_capacity(m);
        let mut next_artificial = n + m;

        for (i, c) in program.constraints.iter().enumerate() {
            let mut row = vec![0.0; width + 1];
            let sign = if c.bound < 0.0 { -1.0 } else { 1.0 };
            for (j, a) in c.coefficients.iter().enumerate() {
                row[j] = sign * a;
            }
            row[n + i] = sign;
            row[width] = sign * c.bound;

            if c.bound < 0.0 {
                row[next_artificial] = 1.0;
                basis.push(next_artificial);
                next_artificial += 1;
            } else {
                basis.push(n + i);
            }
            rows.push(row);
        }

        let mut tableau = Tableau { rows, basis, width };
        let mut iterations = 0;

        if k > 0 {
            let mut phase_one = vec![0.0; width];
            for c in phase_one.iter_mut().skip(n + m) {
                *c = -1.0;
            }
            tableau.optimize(
                &phase_one,
                width,
                self.tolerance,
                &mut iterations,
                self.max_iterations,
            )?;

            let infeasibility: f64 = (0..tableau.rows.len())
                .filter(|&i| tableau.basis[i] >= n + m)
                .map(|i| tableau.rhs(i))
                .sum();
            if infeasibility > self.tolerance {
                return Err(OptimizationError::Infeasible);
            }

            drive_out_artificials(&mut tableau, n + m, self.tolerance);
        }

        let mut cost = vec![0.0; width];
        cost[..n].copy_from_slice(&program.objective);
        tableau.optimize(
            &cost,
            n + m,
            self.tolerance,
            &mut iterations,
            self.max_iterations,
        )?;

        let mut values = vec![0.0; n];
        for (i, &b) in tableau.basis.iter().enumerate() {
            if b < n {
                values[b] = tableau.rhs(i);
            }
        }

        Ok(Solution {
            objective: program.objective_value(&values),
            values,
            iterations,
        })
    }

    fn name(&self) -> &str {
        "simplex"
    }
}

/// Replace zero-valued artificial basics with real columns, dropping rows
/// that have none (redundant constraints).
fn drive_out_artificials(tableau: &mut Tableau, real_columns: usize, tol: f64) {
    let mut i = 0;
    while i < tableau.rows.len() {
        if tableau.basis[i] < real_columns {
            i += 1;
            continue;
        }
        match (0..real_columns).find(|&j| tableau.rows[i][j].abs() > tol) {
            Some(col) => {
                tableau.pivot(i, col);
                i += 1;
            }
            None => {
                tableau.rows.remove(i);
                tableau.basis.remove(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optimizer_spi::Constraint;

    fn solve(lp: &LinearProgram) -> Result<Solution> {
        SimplexSolver::default().solve(lp)
    }

    #[test]
    fn test_textbook_problem() {
        // max 3x + 5y, x <= 4, 2y <= 12, 3x + 2y <= 18 -> (2, 6), 36
        let lp = LinearProgram::maximize(vec![3.0, 5.0])
            .subject_to(Constraint::new("a", vec![1.0, 0.0], 4.0))
            .subject_to(Constraint::new("b", vec![0.0, 2.0], 12.0))
            .subject_to(Constraint::new("c", vec![3.0, 2.0], 18.0));

        let solution = solve(&lp).unwrap();
        assert_relative_eq!(solution.values[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(solution.values[1], 6.0, epsilon = 1e-9);
        assert_relative_eq!(solution.objective, 36.0, epsilon = 1e-9);
    }

    #[test]
    fn test_paired_sample_totals() {
        let lp = LinearProgram::maximize(vec![1.0, 1.0, 1.0])
            .subject_to(Constraint::new("food", vec![1.0, 1.0, 0.0], 5400.0))
            .subject_to(Constraint::new("medical", vec![0.0, 1.0, 1.0], 1100.0))
            .subject_to(Constraint::new("shelters", vec![1.0, 0.0, 1.0], 195.0));

        let solution = solve(&lp).unwrap();
        assert_relative_eq!(solution.values[0], 195.0, epsilon = 1e-9);
        assert_relative_eq!(solution.values[1], 1100.0, epsilon = 1e-9);
        assert_relative_eq!(solution.values[2], 0.0, epsilon = 1e-9);
        assert_relative_eq!(solution.objective, 1295.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unbounded() {
        let lp = LinearProgram::maximize(vec![1.0, 1.0])
            .subject_to(Constraint::new("a", vec![1.0, -1.0], 1.0));
        assert_eq!(solve(&lp), Err(OptimizationError::Unbounded));
    }

    #[test]
    fn test_infeasible() {
        // x + y <= -1 with x, y >= 0
        let lp = LinearProgram::maximize(vec![1.0, 1.0])
            .subject_to(Constraint::new("a", vec![1.0, 1.0], -1.0));
        assert_eq!(solve(&lp), Err(OptimizationError::Infeasible));
    }

    #[test]
    fn test_negative_bound_feasible() {
        // max x + y, -x <= -2 (x >= 2), x + y <= 5
        let lp = LinearProgram::maximize(vec![1.0, 0.5])
            .subject_to(Constraint::new("min_x", vec![-1.0, 0.0], -2.0))
            .subject_to(Constraint::new("cap", vec![1.0, 1.0], 5.0));

        let solution = solve(&lp).unwrap();
        assert!(solution.values[0] >= 2.0 - 1e-9);
        assert_relative_eq!(solution.objective, 5.0, epsilon = 1e-9);
        assert!(lp.first_violation(&solution.values, 1e-9).is_none());
    }

    #[test]
    fn test_zero_bounds_give_origin() {
        let lp = LinearProgram::maximize(vec![1.0, 1.0, 1.0])
            .subject_to(Constraint::new("a", vec![1.0, 1.0, 0.0], 0.0))
            .subject_to(Constraint::new("b", vec![0.0, 1.0, 1.0], 0.0))
            .subject_to(Constraint::new("c", vec![1.0, 0.0, 1.0], 0.0));

        let solution = solve(&lp).unwrap();
        assert_eq!(solution.values, vec![0.0, 0.0, 0.0]);
        assert_eq!(solution.objective, 0.0);
    }

    #[test]
    fn test_iteration_limit() {
        let lp = LinearProgram::maximize(vec![3.0, 5.0])
            .subject_to(Constraint::new("a", vec![1.0, 0.0], 4.0))
            .subject_to(Constraint::new("b", vec![0.0, 2.0], 12.0))
            .subject_to(Constraint::new("c", vec![3.0, 2.0], 18.0));

        let solver = SimplexSolver::new(1e-9, 1);
        assert_eq!(
            solver.solve(&lp),
            Err(OptimizationError::IterationLimit { iterations: 1 })
        );
    }

    #[test]
    fn test_invalid_program() {
        let lp = LinearProgram::maximize(vec![1.0])
            .subject_to(Constraint::new("a", vec![1.0, 1.0], 1.0));
        assert!(matches!(solve(&lp), Err(OptimizationError::InvalidProgram(_))));
    }
}
