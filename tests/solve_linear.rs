use eqstep::core::solver::{solve, Solver, SolverOptions};
use eqstep::{Resolution, SolveError};

fn value_of(eq: &str) -> f64 {
    let s = solve(eq).unwrap_or_else(|e| panic!("{eq}: {e}"));
    s.value().unwrap_or_else(|| panic!("{eq}: no unique value, got {:?}", s.resolution))
}

#[test]
fn canonical_example() {
    let s = solve("2x + 3 = 7").unwrap();
    assert_eq!(s.resolution, Resolution::Unique { value: 2.0 });
    assert_eq!(s.variable, 'x');
    assert!(s.steps.len() >= 5, "{:?}", s.steps);
    assert_eq!(s.steps.as_slice()[0], "Original equation: 2x + 3 = 7");
    assert_eq!(s.steps.as_slice().last().unwrap(), "Answer: x = 2");
    assert_eq!(s.answer(), "x = 2");
}

#[test]
fn simple_values() {
    assert_eq!(value_of("x-4=0"), 4.0);
    assert_eq!(value_of("-x=3"), -3.0);
    assert_eq!(value_of("x+1="), -1.0);
    assert_eq!(value_of("7--2x=1"), -3.0);
}

#[test]
fn repeated_terms_are_summed() {
    let s = solve("3x+2x-1=9").unwrap();
    assert_eq!(s.value(), Some(2.0));
    assert!(s.steps.iter().any(|st| st == "Coefficient of x: 5"), "{:?}", s.steps);
}

#[test]
fn zero_coefficient_branches() {
    let all = solve("0x+5=5").unwrap();
    assert_eq!(all.resolution, Resolution::AllReals);
    assert_eq!(all.answer(), "x ∈ ℝ");
    assert!(all.steps.iter().any(|s| s.contains("holds for every value of x")));

    let none = solve("0x+5=6").unwrap();
    assert_eq!(none.resolution, Resolution::NoSolution);
    assert_eq!(none.answer(), "no solution");
    assert!(none.steps.iter().any(|s| s.contains("has no solutions")));
}

#[test]
fn constant_only_equation_has_no_variable() {
    assert_eq!(solve("5=5").unwrap_err(), SolveError::NoVariable);
}

#[test]
fn variable_on_the_right_is_folded() {
    let s = solve("2x+3=x+5").unwrap();
    assert_eq!(s.value(), Some(2.0));
    let steps = s.steps.as_slice();
    assert!(steps.contains(&"Evaluate the right side with x = 0: x+5 = 5".to_string()), "{steps:?}");
    assert!(
        steps.contains(&"Coefficient of x: 2 on the left, 1 on the right, 2 - 1 = 1".to_string()),
        "{steps:?}"
    );
}

#[test]
fn explicit_products_use_the_evaluated_slope() {
    let s = solve("2*x=8").unwrap();
    assert_eq!(s.value(), Some(4.0));
    assert!(s
        .steps
        .iter()
        .any(|st| st == "Coefficient of x (found by evaluating both sides): 2"));

    assert_eq!(value_of("3(x+1)=9"), 2.0);
    assert_eq!(value_of("x/2=3"), 6.0);
}

#[test]
fn input_is_normalized_first() {
    assert_eq!(value_of("2X+3=7"), 2.0);
    assert_eq!(value_of("2х − 4 = 0"), 2.0); // Cyrillic х, minus sign
    assert_eq!(value_of("0,5x=2"), 4.0);
    assert_eq!(solve("2T = 1").unwrap().variable, 't');
}

#[test]
fn solutions_satisfy_the_equation() {
    let cases = [
        (2.0, 3.0, 7.0),
        (-3.5, 1.25, -4.0),
        (0.25, -8.0, 0.0),
        (7.0, 0.0, 100.0),
        (-1.0, -1.0, -1.0),
        (12.5, 3.75, -0.5),
    ];
    for (a, b1, b2) in cases {
        let eq = format!("{}x+{}={}", a, b1, b2);
        let x = value_of(&eq);
        assert!((a * x + b1 - b2).abs() < 1e-6, "{eq}: x = {x}");
    }
}

#[test]
fn precision_only_affects_display() {
    let solver = Solver::new(SolverOptions { precision: 2, ..SolverOptions::default() });
    let s = solver.solve("3x=1").unwrap();
    assert_eq!(s.answer(), "x = 0.33");
    assert!((s.value().unwrap() - 1.0 / 3.0).abs() < 1e-12);
}
