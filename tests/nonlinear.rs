use eqstep::core::solver::{solve, Solver, SolverOptions};
use eqstep::{Resolution, SolveError};

#[test]
fn square_root_by_bisection() {
    let s = solve("x*x=2").unwrap();
    match &s.resolution {
        Resolution::Approximate { value, iterations, converged, .. } => {
            assert!((value - 2f64.sqrt()).abs() < 1e-6, "value {value}");
            assert!(*iterations <= 100);
            assert!(*converged);
        }
        other => panic!("expected an approximation, got {other:?}"),
    }
    assert!(s.answer().starts_with("x ≈ 1.41421"), "{}", s.answer());
    assert!(s.steps.iter().any(|st| st == "Sign change found between x = 1 and x = 2"));
}

#[test]
fn reciprocal_hits_a_sample_exactly() {
    let s = solve("1/x=2").unwrap();
    assert_eq!(s.value(), Some(0.5));
    assert!(s.steps.iter().any(|st| st == "Sample x = 0.5 is an exact root"), "{:?}", s.steps);
}

#[test]
fn no_root_is_reported_not_hidden() {
    let s = solve("x*x=-1").unwrap();
    assert_eq!(
        s.resolution,
        Resolution::Approximate { value: 0.0, residual: 1.0, iterations: 0, converged: false }
    );
    assert_eq!(s.answer(), "x ≈ 0 (no root located)");
}

#[test]
fn iteration_cap_is_honored() {
    let solver = Solver::new(SolverOptions { max_iterations: 5, ..SolverOptions::default() });
    let s = solver.solve("x*x=2").unwrap();
    match s.resolution {
        Resolution::Approximate { iterations, converged, .. } => {
            assert_eq!(iterations, 5);
            assert!(!converged);
        }
        other => panic!("expected an approximation, got {other:?}"),
    }
}

#[test]
fn blow_up_everywhere_is_an_expression_error() {
    assert!(matches!(solve("2x=7/0"), Err(SolveError::ExpressionParse { .. })));
    assert!(matches!(solve("x/0=1"), Err(SolveError::ExpressionParse { .. })));
}
