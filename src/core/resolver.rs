//! Turning decomposed sides into a classified resolution, with trace.
//!
//! The single-variable path folds both sides into `a·x + b1 = b2` and
//! classifies it. The term scan of [`crate::core::linear`] is cross-checked
//! against the parse tree probed at fixed points:
//!
//! * affine and agreeing: the scanned coefficient is used as is;
//! * affine but disagreeing (`2*x`, `x/2`, `3(x+1)`): the probed slope wins;
//! * not affine (`x*x`, `1/x`): a bounded bisection produces an estimate.
//!
//! The multi-variable path only isolates the first variable; the others are
//! reported as free and never solved. It has no numeric fallback: an equation
//! that is not linear in every variable is rejected.

use serde::Serialize;

use crate::core::ast::Expr;
use crate::core::equation::Sides;
use crate::core::error::SolveError;
use crate::core::evaluator::{bind_all, evaluate, parse_side, Bindings};
use crate::core::linear::{decompose_at, scan_coefficient};
use crate::core::normalizer::collapse_signs;
use crate::core::solver::SolverOptions;
use crate::core::trace::{fmt_num, format_term, paren_num, render_terms, StepTrace};

/// Points at which both sides are evaluated to test for affinity.
const PROBES: [f64; 5] = [0.0, 1.0, 2.0, -1.5, 3.25];
const AFFINE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeTerm {
    pub variable: char,
    pub coefficient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Unique { value: f64 },
    AllReals,
    NoSolution,
    /// `coefficient·variable + Σ free_terms + constant = 0`, nothing eliminated.
    PartialReduction {
        variable: char,
        coefficient: f64,
        constant: f64,
        free_terms: Vec<FreeTerm>,
    },
    /// Best estimate of the bounded bisection for non-affine sides.
    Approximate {
        value: f64,
        residual: f64,
        iterations: usize,
        converged: bool,
    },
}

impl Resolution {
    /// The numeric answer, when there is exactly one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Resolution::Unique { value } | Resolution::Approximate { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Right-hand side of `variable = ...` for a partial reduction whose main
    /// variable did not cancel out.
    pub fn isolated(&self, precision: usize) -> Option<String> {
        match self {
            Resolution::PartialReduction { coefficient, constant, free_terms, .. } if *coefficient != 0.0 => {
                let mut terms = vec![(-constant / coefficient, None)];
                terms.extend(
                    free_terms
                        .iter()
                        .map(|t| (-t.coefficient / coefficient, Some(t.variable))),
                );
                Some(render_terms(&terms, precision))
            }
            _ => None,
        }
    }
}

/// `a·x + b1 = b2` classified: `AllReals`/`NoSolution` when `a == 0`.
pub fn classify(coefficient: f64, left_constant: f64, right_value: f64) -> Resolution {
    if coefficient == 0.0 {
        if left_constant == right_value {
            Resolution::AllReals
        } else {
            Resolution::NoSolution
        }
    } else {
        Resolution::Unique { value: (right_value - left_constant) / coefficient }
    }
}

/// Both sides as parse trees, for probing.
struct Probe {
    left: Expr,
    right: Expr,
}

impl Probe {
    fn new(sides: &Sides) -> Result<Self, SolveError> {
        Ok(Self {
            left: parse_side(&sides.left, 0)?,
            right: parse_side(sides.right_or_zero(), sides.right_offset)?,
        })
    }

    /// `L - R` under `bindings`; non-finite when a side blows up.
    fn diff(&self, bindings: &Bindings) -> f64 {
        match (evaluate(&self.left, bindings), evaluate(&self.right, bindings)) {
            (Ok(l), Ok(r)) => l - r,
            _ => f64::NAN,
        }
    }

    fn at(&self, variable: char, value: f64) -> f64 {
        self.at_over(&Bindings::new(), variable, value)
    }

    /// `L - R` with `variable` set to `value` and every other letter taken from `base`.
    fn at_over(&self, base: &Bindings, variable: char, value: f64) -> f64 {
        let mut bindings = base.clone();
        bindings.insert(variable, value);
        self.diff(&bindings)
    }

    /// Slope of `L - R` in `variable` if it is affine there.
    fn affine_slope(&self, variable: char) -> Option<f64> {
        self.affine_slope_over(&Bindings::new(), variable)
    }

    fn affine_slope_over(&self, base: &Bindings, variable: char) -> Option<f64> {
        let values: Vec<f64> = PROBES.iter().map(|p| self.at_over(base, variable, *p)).collect();
        if values.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let (f0, slope) = (values[0], values[1] - values[0]);
        let scale = 1.0 + values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        let affine = PROBES
            .iter()
            .zip(&values)
            .all(|(p, v)| (v - (f0 + slope * p)).abs() <= AFFINE_TOLERANCE * scale);
        affine.then_some(slope)
    }

    /// First of `variables` in which `L - R` is not linear. Each one is probed
    /// with the others held at 0 and again at 1, so cross terms such as `x*y`
    /// show up as a slope that moves.
    fn first_nonlinear(&self, variables: &[char]) -> Option<char> {
        let (zeros, ones) = (bind_all(variables, 0.0), bind_all(variables, 1.0));
        variables.iter().copied().find(|&v| {
            match (self.affine_slope_over(&zeros, v), self.affine_slope_over(&ones, v)) {
                (Some(a), Some(b)) => !agrees(a, b),
                _ => true,
            }
        })
    }
}

fn agrees(a: f64, b: f64) -> bool {
    (a - b).abs() <= AFFINE_TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

/// Resolve an equation with a single unknown `variable`.
pub fn resolve_single(
    sides: &Sides,
    variable: char,
    options: &SolverOptions,
    trace: &mut StepTrace,
) -> Result<Resolution, SolveError> {
    let p = options.precision;
    let right_text = sides.right_or_zero();
    let probe = Probe::new(sides)?;
    // Non-affine sides may blow up at 0 (`1/x`), so decompose only after this.
    let Some(slope) = probe.affine_slope(variable) else {
        if PROBES.iter().all(|p| !probe.at(variable, *p).is_finite()) {
            return Err(SolveError::parse("expression does not evaluate to a finite number"));
        }
        debug_log!("sides are not affine in {}; bisecting", variable);
        return Ok(refine(&probe, variable, options, trace));
    };
    let left_form = decompose_at(&sides.left, variable, 0)?;
    let right_form = decompose_at(right_text, variable, sides.right_offset)?;
    debug_log!("left {:?} right {:?}", left_form, right_form);

    let scanned = left_form.coefficient - right_form.coefficient;

    let (b1, b2) = (left_form.constant, right_form.constant);
    if probe.right.mentions(variable) {
        trace.push(format!(
            "Evaluate the right side with {} = 0: {} = {}",
            variable, right_text, fmt_num(b2, p)
        ));
    } else {
        trace.push(format!("Evaluate the right side: {} = {}", right_text, fmt_num(b2, p)));
    }
    trace.push(format!(
        "Evaluate the constant part of the left side ({} = 0): {} = {}",
        variable, sides.left, fmt_num(b1, p)
    ));

    let coefficient = if agrees(scanned, slope) {
        if right_form.coefficient != 0.0 {
            trace.push(format!(
                "Coefficient of {v}: {} on the left, {} on the right, {} - {} = {}",
                fmt_num(left_form.coefficient, p),
                fmt_num(right_form.coefficient, p),
                fmt_num(left_form.coefficient, p),
                paren_num(right_form.coefficient, p),
                fmt_num(scanned, p),
                v = variable,
            ));
        } else {
            trace.push(format!("Coefficient of {}: {}", variable, fmt_num(scanned, p)));
        }
        scanned
    } else {
        debug_log!("scanned coefficient {} disagrees with probed slope {}", scanned, slope);
        trace.push(format!(
            "Coefficient of {} (found by evaluating both sides): {}",
            variable, fmt_num(slope, p)
        ));
        slope
    };

    let resolution = classify(coefficient, b1, b2);
    match &resolution {
        Resolution::AllReals => {
            trace.push(format!("Solution: the equation holds for every value of {}", variable));
        }
        Resolution::NoSolution => {
            trace.push("Solution: the equation has no solutions");
        }
        Resolution::Unique { value } => {
            let term = format_term(coefficient, variable, p);
            let delta = b2 - b1;
            trace.push("Solve the equation:");
            trace.push(format!(
                "  {} = {}",
                render_terms(&[(coefficient, Some(variable)), (b1, None)], p),
                fmt_num(b2, p)
            ));
            trace.push(format!("  {} = {} - {}", term, fmt_num(b2, p), paren_num(b1, p)));
            trace.push(format!("  {} = {}", term, fmt_num(delta, p)));
            trace.push(format!("  {} = {} / {}", variable, fmt_num(delta, p), paren_num(coefficient, p)));
            trace.push(format!("Answer: {} = {}", variable, fmt_num(*value, p)));
        }
        _ => {}
    }
    Ok(resolution)
}

/// Isolate `variables[0]`, leaving the remaining letters free.
pub fn resolve_multi(
    sides: &Sides,
    variables: &[char],
    options: &SolverOptions,
    trace: &mut StepTrace,
) -> Result<Resolution, SolveError> {
    let p = options.precision;
    let main = variables[0];
    let right_text = sides.right_or_zero();
    let probe = Probe::new(sides)?;
    if let Some(v) = probe.first_nonlinear(variables) {
        debug_log!("not linear in {}; refusing a partial reduction", v);
        return Err(SolveError::parse(&format!(
            "the equation is not linear in {}, so {} cannot be isolated",
            v, main
        )));
    }
    let left_form = decompose_at(&sides.left, main, 0)?;
    let right_form = decompose_at(right_text, main, sides.right_offset)?;
    let left = collapse_signs(&sides.left);
    let right = collapse_signs(right_text);
    let zero = probe.diff(&bind_all(variables, 0.0));

    let mut folded = Vec::with_capacity(variables.len());
    for &v in variables {
        let scanned = scan_coefficient(&left, v)? - scan_coefficient(&right, v)?;
        let mut bindings = bind_all(variables, 0.0);
        bindings.insert(v, 1.0);
        let probed = probe.diff(&bindings) - zero;
        let coefficient = if probed.is_finite() && !agrees(scanned, probed) {
            debug_log!("{}: scanned {} probed {}", v, scanned, probed);
            probed
        } else {
            scanned
        };
        folded.push((coefficient, v));
    }
    let constant = left_form.constant - right_form.constant;
    let coefficient = folded[0].0;
    let free_terms: Vec<FreeTerm> = folded[1..]
        .iter()
        .map(|&(coefficient, variable)| FreeTerm { variable, coefficient })
        .collect();
    let free_names: Vec<String> = variables[1..].iter().map(|v| v.to_string()).collect();

    trace.push(format!(
        "Variables found: {}; isolating {}, the others stay free",
        variables.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "),
        main
    ));
    let mut all_terms: Vec<(f64, Option<char>)> = folded.iter().map(|&(c, v)| (c, Some(v))).collect();
    all_terms.push((constant, None));
    trace.push(format!("Move every term to the left: {} = 0", render_terms(&all_terms, p)));
    trace.push(format!("Coefficient of {}: {}", main, fmt_num(coefficient, p)));

    let resolution = Resolution::PartialReduction { variable: main, coefficient, constant, free_terms };
    match resolution.isolated(p) {
        Some(isolated) => {
            let mut moved: Vec<(f64, Option<char>)> = vec![(-constant, None)];
            moved.extend(folded[1..].iter().map(|&(c, v)| (-c, Some(v))));
            let moved_text = render_terms(&moved, p);
            trace.push(format!("  {} = {}", format_term(coefficient, main, p), moved_text));
            trace.push(format!("  {} = ({}) / {}", main, moved_text, paren_num(coefficient, p)));
            if coefficient != 1.0 {
                trace.push(format!("  {} = {}", main, divide_terms(&moved, coefficient, p)));
            }
            trace.push(format!("Answer: {} = {}", main, isolated));
        }
        None => {
            trace.push(format!("{} cancels out, so it cannot be isolated", main));
        }
    }
    trace.push(format!("Free variables: {}", free_names.join(", ")));
    Ok(resolution)
}

/// `7 / 2 - 3y / 2`: every term of `terms` divided by `divisor` on its own.
fn divide_terms(terms: &[(f64, Option<char>)], divisor: f64, precision: usize) -> String {
    let mut out = String::new();
    for &(coefficient, variable) in terms.iter().filter(|t| t.0 != 0.0) {
        if out.is_empty() {
            if coefficient < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if coefficient < 0.0 { " - " } else { " + " });
        }
        out.push_str(&render_terms(&[(coefficient.abs(), variable)], precision));
        out.push_str(" / ");
        out.push_str(&paren_num(divisor, precision));
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

fn refine(probe: &Probe, variable: char, options: &SolverOptions, trace: &mut StepTrace) -> Resolution {
    let p = options.precision;
    trace.push(format!(
        "The equation is not linear in {}; searching for a root numerically",
        variable
    ));
    let outcome = bisect(|x| probe.at(variable, x), options);
    match outcome.bracket {
        Some((lo, hi)) => trace.push(format!(
            "Sign change found between {} = {} and {} = {}",
            variable, fmt_num(lo, p), variable, fmt_num(hi, p)
        )),
        None if outcome.residual == 0.0 => trace.push(format!(
            "Sample {} = {} is an exact root",
            variable,
            fmt_num(outcome.value, p)
        )),
        None => trace.push(format!(
            "No sign change between {v} = -{l} and {v} = {l}; keeping the closest sample",
            v = variable,
            l = fmt_num(options.search_limit, p)
        )),
    }
    trace.push(format!(
        "Bisection: {} iterations, residual {}",
        outcome.iterations,
        fmt_num(outcome.residual, p)
    ));
    let converged = outcome.residual <= options.tolerance.sqrt();
    if converged {
        trace.push(format!("Answer: {} ≈ {}", variable, fmt_num(outcome.value, p)));
    } else {
        trace.push(format!(
            "Answer: no root located; best estimate {} ≈ {}",
            variable,
            fmt_num(outcome.value, p)
        ));
    }
    Resolution::Approximate {
        value: outcome.value,
        residual: outcome.residual,
        iterations: outcome.iterations,
        converged,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BisectionOutcome {
    pub value: f64,
    pub residual: f64,
    pub iterations: usize,
    pub bracket: Option<(f64, f64)>,
}

/// Sample points `0, ±0.5, ±1, ±2, ...` up to `limit`, ascending.
fn sample_grid(limit: f64) -> Vec<f64> {
    let mut grid = vec![0.0];
    let mut r = 0.5;
    while r <= limit && grid.len() < 256 {
        grid.push(r);
        grid.push(-r);
        r *= 2.0;
    }
    grid.sort_by(|a, b| a.total_cmp(b));
    grid
}

/// Bounded root search: grid scan for a sign change nearest zero, then at most
/// `options.max_iterations` halvings. Always returns the best sample seen.
pub fn bisect<F: Fn(f64) -> f64>(f: F, options: &SolverOptions) -> BisectionOutcome {
    let samples: Vec<(f64, f64)> = sample_grid(options.search_limit)
        .into_iter()
        .map(|x| (x, f(x)))
        .filter(|(_, y)| y.is_finite())
        .collect();

    let mut best = samples
        .iter()
        .copied()
        .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .unwrap_or((0.0, f64::INFINITY));

    let bracket = samples
        .windows(2)
        .filter(|w| w[0].1.signum() != w[1].1.signum() && w[0].1 != 0.0 && w[1].1 != 0.0)
        .map(|w| (w[0], w[1]))
        .min_by(|a, b| {
            let ka = (a.0 .0.abs() + a.1 .0.abs(), a.0 .0 < 0.0);
            let kb = (b.0 .0.abs() + b.1 .0.abs(), b.0 .0 < 0.0);
            ka.0.total_cmp(&kb.0).then(ka.1.cmp(&kb.1))
        });

    let mut iterations = 0;
    if best.1 != 0.0 {
        if let Some(((mut lo, mut flo), (mut hi, _))) = bracket {
            while iterations < options.max_iterations {
                iterations += 1;
                let mid = lo + (hi - lo) / 2.0;
                let fm = f(mid);
                if !fm.is_finite() {
                    break;
                }
                if fm.abs() < best.1.abs() {
                    best = (mid, fm);
                }
                if fm == 0.0 || (hi - lo) / 2.0 <= options.tolerance {
                    break;
                }
                if fm.signum() == flo.signum() {
                    lo = mid;
                    flo = fm;
                } else {
                    hi = mid;
                }
            }
        }
    }

    BisectionOutcome {
        value: best.0,
        residual: best.1.abs(),
        iterations,
        bracket: bracket.map(|(a, b)| (a.0, b.0)),
    }
}
