//! Step trace and the display formatting used inside it.
//!
//! Everything here is cosmetic: values are rounded for display only, never for
//! the computation that produced them.

use serde::Serialize;

/// Append-only list of human-readable resolution steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StepTrace {
    steps: Vec<String>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.steps
    }

    pub fn into_vec(self) -> Vec<String> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Precision at or above which numbers print exactly (shortest round-trip form).
pub const FULL_PRECISION: usize = 17;

/// Render a number rounded to `precision` decimal places, without trailing
/// zeros and without a negative zero.
pub fn fmt_num(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    if precision >= FULL_PRECISION {
        return format!("{}", value + 0.0);
    }
    let scale = 10f64.powi(precision.min(15) as i32);
    let rounded = (value * scale).round() / scale;
    let shown = if rounded.is_finite() { rounded } else { value };
    format!("{}", shown + 0.0)
}

/// `2x`, bare `x` for 1, `-x` for -1.
pub fn format_term(coefficient: f64, variable: char, precision: usize) -> String {
    if coefficient == 1.0 {
        variable.to_string()
    } else if coefficient == -1.0 {
        format!("-{}", variable)
    } else {
        format!("{}{}", fmt_num(coefficient, precision), variable)
    }
}

/// Join `(coefficient, variable)` pairs into `3x - y + 2`. A `None` variable is
/// a constant term. Zero terms are skipped; an all-zero list renders as `0`.
pub fn render_terms(terms: &[(f64, Option<char>)], precision: usize) -> String {
    let mut out = String::new();
    for &(coefficient, variable) in terms {
        if coefficient == 0.0 {
            continue;
        }
        let magnitude = coefficient.abs();
        let body = match variable {
            Some(v) => format_term(magnitude, v, precision),
            None => fmt_num(magnitude, precision),
        };
        if out.is_empty() {
            if coefficient < 0.0 {
                out.push('-');
            }
        } else if coefficient < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Wrap negative numbers in parentheses so `7 - (-3)` stays readable.
pub fn paren_num(value: f64, precision: usize) -> String {
    let text = fmt_num(value, precision);
    if text.starts_with('-') { format!("({})", text) } else { text }
}
