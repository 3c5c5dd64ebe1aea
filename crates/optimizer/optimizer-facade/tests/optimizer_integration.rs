//! Integration tests for the optimizer facade

use approx::assert_relative_eq;
use data_core::InMemoryDatasetSource;
use data_spi::{DatasetSource, RegionSnapshot};
use optimizer_facade::{
    optimize, optimize_with, paired_program, AllocationOptimizer, Constraint, LinearProgram,
    LpSolver, OptimizationError, OptimizerConfig, PairedResourceAllocator, SimplexSolver,
};

const TOL: f64 = 1e-6;

fn assert_valid(regions: &[RegionSnapshot], values: &[f64]) {
    let food: i64 = regions.iter().map(|r| r.food_supplies).sum();
    let medical: i64 = regions.iter().map(|r| r.medical_kits).sum();
    let shelters: i64 = regions.iter().map(|r| r.shelters).sum();

    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| *v >= 0.0));
    assert!(values[0] + values[1] <= food as f64 + TOL);
    assert!(values[1] + values[2] <= medical as f64 + TOL);
    assert!(values[0] + values[2] <= shelters as f64 + TOL);
}

#[test]
fn test_sample_dataset_plan() {
    let snapshot = InMemoryDatasetSource::sample().load_snapshot().unwrap();
    let totals = snapshot.totals().unwrap();
    assert_eq!(totals.supply_bounds(), [5400, 1100, 195]);

    let plan = optimize(snapshot.regions()).unwrap();
    assert_valid(snapshot.regions(), plan.as_slice());
    assert_relative_eq!(plan.food_linked(), 195.0, epsilon = TOL);
    assert_relative_eq!(plan.medical_linked(), 1100.0, epsilon = TOL);
    assert_relative_eq!(plan.shelter_linked(), 0.0, epsilon = TOL);
}

#[test]
fn test_solutions_satisfy_constraints_across_totals() {
    let budgets = [0, 1, 7, 50, 195, 1100, 5400];
    for &food in &budgets {
        for &medical in &budgets {
            for &shelters in &budgets {
                let regions = vec![
                    RegionSnapshot::new("A", food, medical, shelters, 0),
                    RegionSnapshot::new("B", 0, 0, 0, 10),
                ];
                let plan = optimize(&regions).unwrap();
                assert_valid(&regions, plan.as_slice());

                // Sum of all constraints bounds the total by half the budget
                let half = (food + medical + shelters) as f64 / 2.0;
                assert!(plan.objective <= half + TOL);
            }
        }
    }
}

#[test]
fn test_balanced_budgets_fill_every_constraint() {
    let regions = vec![RegionSnapshot::new("A", 100, 100, 100, 0)];
    let plan = optimize(&regions).unwrap();
    assert_relative_eq!(plan.objective, 150.0, epsilon = TOL);
}

#[test]
fn test_region_count_does_not_change_shape() {
    let one = vec![RegionSnapshot::new("All", 5400, 1100, 195, 23000)];
    let snapshot = InMemoryDatasetSource::sample().load_snapshot().unwrap();

    let a = optimize(&one).unwrap();
    let b = optimize(snapshot.regions()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_negative_totals_fail() {
    let regions = vec![
        RegionSnapshot::new("A", -10, 5, 5, 0),
        RegionSnapshot::new("B", 2, 5, 5, 0),
    ];
    let err = optimize(&regions).unwrap_err();
    assert!(matches!(err, OptimizationError::NegativeBound { value: -8, .. }));
    assert_eq!(err.to_string(), "Aggregated Food Supplies is negative: -8");
}

#[test]
fn test_identical_input_identical_plan() {
    let snapshot = InMemoryDatasetSource::sample().load_snapshot().unwrap();
    let allocator = PairedResourceAllocator::default();
    assert_eq!(
        allocator.optimize(snapshot.regions()).unwrap(),
        allocator.optimize(snapshot.regions()).unwrap()
    );
}

#[test]
fn test_invalid_config() {
    let regions = vec![RegionSnapshot::new("A", 1, 1, 1, 1)];
    let config = OptimizerConfig::new().with_max_iterations(0);
    assert!(matches!(
        optimize_with(&regions, config),
        Err(OptimizationError::InvalidConfig(_))
    ));
}

#[test]
fn test_solver_reports_infeasible_and_unbounded() {
    let solver = SimplexSolver::default();

    let infeasible = LinearProgram::maximize(vec![1.0, 1.0, 1.0])
        .subject_to(Constraint::new("x0 >= 5", vec![-1.0, 0.0, 0.0], -5.0))
        .subject_to(Constraint::new("x0 <= 2", vec![1.0, 0.0, 0.0], 2.0));
    assert_eq!(solver.solve(&infeasible), Err(OptimizationError::Infeasible));

    let unbounded = LinearProgram::maximize(vec![1.0, 1.0, 1.0])
        .subject_to(Constraint::new("x0", vec![1.0, 0.0, 0.0], 2.0));
    assert_eq!(solver.solve(&unbounded), Err(OptimizationError::Unbounded));
}

#[test]
fn test_paired_program_solves_directly() {
    let snapshot = InMemoryDatasetSource::sample().load_snapshot().unwrap();
    let program = paired_program(&snapshot.totals().unwrap()).unwrap();
    let solution = SimplexSolver::default().solve(&program).unwrap();
    assert_relative_eq!(solution.objective, 1295.0, epsilon = TOL);
}
