//! Entry point: text in, classified solution plus step trace out.

use serde::{Deserialize, Serialize};

use crate::core::equation::split_sides;
use crate::core::error::SolveError;
use crate::core::normalizer::normalize;
use crate::core::resolver::{resolve_multi, resolve_single, Resolution};
use crate::core::trace::{fmt_num, StepTrace};
use crate::core::variables::detect_variables;

/// Tuning knobs; also the `[solver]` table of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Cap on bisection halvings.
    pub max_iterations: usize,
    /// Bisection stops once the bracket is this narrow.
    pub tolerance: f64,
    /// Bracket search covers `[-search_limit, search_limit]`.
    pub search_limit: f64,
    /// Decimal places shown in the trace.
    pub precision: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self { max_iterations: 100, tolerance: 1e-9, search_limit: 1e6, precision: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// The equation as given, trimmed.
    pub equation: String,
    /// The unknown being solved for (the first letter found).
    pub variable: char,
    /// Every distinct letter, in order of first appearance.
    pub variables: Vec<char>,
    pub steps: StepTrace,
    pub resolution: Resolution,
    #[serde(skip)]
    precision: usize,
}

impl Solution {
    /// Short answer marker: `x = 2`, `x ∈ ℝ`, `no solution`, `x ≈ 1.41`, ...
    pub fn answer(&self) -> String {
        let v = self.variable;
        let p = self.precision;
        match &self.resolution {
            Resolution::Unique { value } => format!("{} = {}", v, fmt_num(*value, p)),
            Resolution::AllReals => format!("{} ∈ ℝ", v),
            Resolution::NoSolution => "no solution".to_string(),
            Resolution::Approximate { value, converged: true, .. } => {
                format!("{} ≈ {}", v, fmt_num(*value, p))
            }
            Resolution::Approximate { value, .. } => {
                format!("{} ≈ {} (no root located)", v, fmt_num(*value, p))
            }
            Resolution::PartialReduction { .. } => {
                let free: Vec<String> = self.variables[1..].iter().map(|c| c.to_string()).collect();
                match self.resolution.isolated(p) {
                    Some(expr) => format!("{} = {} ({} free)", v, expr, free.join(", ")),
                    None => format!("{} cannot be isolated", v),
                }
            }
        }
    }

    /// The numeric value for unique and approximate answers.
    pub fn value(&self) -> Option<f64> {
        self.resolution.value()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    options: SolverOptions,
}

impl Solver {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn solve(&self, text: &str) -> Result<Solution, SolveError> {
        let normalized = normalize(text);
        debug_log!("normalized {:?} -> {:?}", text, normalized);
        let sides = split_sides(&normalized)?;
        let variables = detect_variables(&normalized)?;
        debug_log!("variables {:?}", variables);

        let mut steps = StepTrace::new();
        steps.push(format!("Original equation: {}", text.trim()));
        let resolution = if variables.len() > 1 {
            resolve_multi(&sides, &variables, &self.options, &mut steps)?
        } else {
            resolve_single(&sides, variables[0], &self.options, &mut steps)?
        };
        debug_log!("resolved {:?} in {} steps", resolution, steps.len());

        Ok(Solution {
            equation: text.trim().to_string(),
            variable: variables[0],
            variables,
            steps,
            resolution,
            precision: self.options.precision,
        })
    }
}

/// Solve with default options.
pub fn solve(text: &str) -> Result<Solution, SolveError> {
    Solver::default().solve(text)
}
