//! Coefficient/constant decomposition of one equation side.

use serde::Serialize;

use crate::core::error::SolveError;
use crate::core::evaluator::{bind_all, evaluate_finite, parse_side};
use crate::core::normalizer::{collapse_signs, normalize};
use crate::core::trace::{render_terms, FULL_PRECISION};

/// `coefficient·variable + constant` for one side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearForm {
    pub coefficient: f64,
    pub constant: f64,
}

impl LinearForm {
    pub fn new(coefficient: f64, constant: f64) -> Self {
        Self { coefficient, constant }
    }

    pub fn at(&self, value: f64) -> f64 {
        self.coefficient * value + self.constant
    }

    /// Display text such as `3x + 2` or `-x - 4.5`, exact enough that
    /// [`LinearForm::parse`] returns the same pair.
    pub fn render(&self, variable: char) -> String {
        render_terms(
            &[(self.coefficient, Some(variable)), (self.constant, None)],
            FULL_PRECISION,
        )
    }

    /// Normalize `text` and decompose it for `variable`.
    pub fn parse(text: &str, variable: char) -> Result<Self, SolveError> {
        decompose(&normalize(text), variable)
    }
}

/// Decompose a normalized side into its linear form for `variable`.
pub fn decompose(expression: &str, variable: char) -> Result<LinearForm, SolveError> {
    decompose_at(expression, variable, 0)
}

/// As [`decompose`], reporting error columns shifted by `offset`.
pub fn decompose_at(expression: &str, variable: char, offset: usize) -> Result<LinearForm, SolveError> {
    let text = collapse_signs(expression);
    let coefficient = scan_coefficient(&text, variable).map_err(|e| e.offset(offset))?;
    let constant = constant_part(&text, offset)?;
    Ok(LinearForm { coefficient, constant })
}

/// Sum the prefixes of every `[+-]?[0-9.]*<variable>` match. An empty or `+`
/// prefix counts as 1, a bare `-` as -1.
pub fn scan_coefficient(expression: &str, variable: char) -> Result<f64, SolveError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut coefficient = 0.0;
    for (i, ch) in chars.iter().enumerate() {
        if !ch.eq_ignore_ascii_case(&variable) {
            continue;
        }
        let mut start = i;
        while start > 0 && (chars[start - 1].is_ascii_digit() || chars[start - 1] == '.') {
            start -= 1;
        }
        if start > 0 && matches!(chars[start - 1], '+' | '-') {
            start -= 1;
        }
        let prefix: String = chars[start..i].iter().collect();
        coefficient += match prefix.as_str() {
            "" | "+" => 1.0,
            "-" => -1.0,
            digits => digits.parse::<f64>().map_err(|_| {
                SolveError::parse_at(
                    &format!("cannot read coefficient '{}' of '{}'", digits, variable),
                    start + 1,
                )
            })?,
        };
    }
    Ok(coefficient)
}

/// Value of the side with every letter in it set to 0.
fn constant_part(text: &str, offset: usize) -> Result<f64, SolveError> {
    let expr = parse_side(text, offset)?;
    let letters: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    evaluate_finite(&expr, &bind_all(&letters, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_repeated_terms() {
        assert_eq!(decompose("3x+2x-1", 'x').unwrap(), LinearForm::new(5.0, -1.0));
    }

    #[test]
    fn implicit_unit_coefficients() {
        assert_eq!(scan_coefficient("x-x+x", 'x').unwrap(), 1.0);
        assert_eq!(scan_coefficient("-X", 'x').unwrap(), -1.0);
    }

    #[test]
    fn side_without_variable_has_zero_coefficient() {
        assert_eq!(decompose("4+3", 'x').unwrap(), LinearForm::new(0.0, 7.0));
    }

    #[test]
    fn bare_dot_prefix_is_rejected() {
        assert!(decompose(".x+1", 'x').is_err());
    }

    #[test]
    fn renders_back_to_text() {
        assert_eq!(LinearForm::new(3.0, 2.0).render('x'), "3x + 2");
        assert_eq!(LinearForm::new(-1.0, -4.5).render('x'), "-x - 4.5");
        assert_eq!(LinearForm::new(0.0, 0.0).render('x'), "0");
    }
}
