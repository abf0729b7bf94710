//! Tree-walking evaluation of parsed sides.

use std::collections::HashMap;

use crate::core::ast::Expr;
use crate::core::error::SolveError;
use crate::core::lexer::Lexer;
use crate::core::normalizer::collapse_signs;
use crate::core::parser::Parser;
use crate::core::token::TokenKind;

/// Values substituted for variables during evaluation.
pub type Bindings = HashMap<char, f64>;

/// Collapse sign runs, tokenize and parse one side. `offset` is the column of
/// the side's first character minus one.
pub fn parse_side(text: &str, offset: usize) -> Result<Expr, SolveError> {
    let collapsed = collapse_signs(text);
    let tokens = Lexer::with_offset(&collapsed, offset).tokenize()?;
    Ok(Parser::new(tokens).parse()?)
}

/// Evaluate `expr`. Division by zero yields an infinity or NaN rather than an
/// error so probing callers can detect it; see [`evaluate_finite`].
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<f64, SolveError> {
    match expr {
        Expr::Number(v) => Ok(*v),
        Expr::Variable(name) => bindings
            .get(name)
            .copied()
            .ok_or_else(|| SolveError::parse(&format!("no value for variable '{}'", name))),
        Expr::UnaryExpr { op, expr } => {
            let v = evaluate(expr, bindings)?;
            match op {
                TokenKind::Minus => Ok(-v),
                _ => Ok(v),
            }
        }
        Expr::BinaryExpr { op, left, right } => {
            let l = evaluate(left, bindings)?;
            let r = evaluate(right, bindings)?;
            match op {
                TokenKind::Plus => Ok(l + r),
                TokenKind::Minus => Ok(l - r),
                TokenKind::Star => Ok(l * r),
                TokenKind::Slash => Ok(l / r),
                other => Err(SolveError::parse(&format!("unsupported operator '{}'", other))),
            }
        }
    }
}

pub fn evaluate_finite(expr: &Expr, bindings: &Bindings) -> Result<f64, SolveError> {
    let v = evaluate(expr, bindings)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SolveError::parse("expression does not evaluate to a finite number"))
    }
}

/// Reduce a variable-free expression such as `20+3` or `7--2` to a number.
pub fn calculate_expression(text: &str) -> Result<f64, SolveError> {
    let expr = parse_side(text, 0)?;
    evaluate_finite(&expr, &Bindings::new())
}

/// Bind every listed variable to the same value.
pub fn bind_all(variables: &[char], value: f64) -> Bindings {
    variables.iter().map(|v| (*v, value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_and_subtracts_left_to_right() {
        assert_eq!(calculate_expression("10-4-3").unwrap(), 3.0);
        assert_eq!(calculate_expression("7--2").unwrap(), 9.0);
        assert_eq!(calculate_expression("-+5").unwrap(), -5.0);
    }

    #[test]
    fn products_bind_tighter() {
        assert_eq!(calculate_expression("2+3*4").unwrap(), 14.0);
        assert_eq!(calculate_expression("8/4/2").unwrap(), 1.0);
    }

    #[test]
    fn free_variable_is_an_error() {
        assert!(matches!(
            calculate_expression("2x+1"),
            Err(SolveError::ExpressionParse { .. })
        ));
    }

    #[test]
    fn division_by_literal_zero_is_an_error() {
        assert!(calculate_expression("5/0").is_err());
    }
}
