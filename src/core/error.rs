use std::fmt;

/// Failures surfaced at the `solve` boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// No letter token survived normalization.
    NoVariable,
    /// Missing or repeated `=`, or an empty left side.
    MalformedEquation(String),
    /// Non-numeric remainder, dangling operator, unbalanced parenthesis.
    /// `column` is 1-based in the normalized equation when known.
    ExpressionParse { message: String, column: Option<usize> },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoVariable => write!(
                f,
                "Equation contains no variable (expected a letter such as x, y, t)"
            ),
            SolveError::MalformedEquation(msg) => write!(f, "Malformed equation: {}", msg),
            SolveError::ExpressionParse { message, column: Some(col) } => {
                write!(f, "Expression error: {} at column {}", message, col)
            }
            SolveError::ExpressionParse { message, column: None } => {
                write!(f, "Expression error: {}", message)
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl SolveError {
    pub fn malformed(message: &str) -> Self { SolveError::MalformedEquation(message.to_string()) }
    pub fn parse(message: &str) -> Self {
        SolveError::ExpressionParse { message: message.to_string(), column: None }
    }
    pub fn parse_at(message: &str, column: usize) -> Self {
        SolveError::ExpressionParse { message: message.to_string(), column: Some(column) }
    }

    /// Column of the offending character, if the error carries one.
    pub fn column(&self) -> Option<usize> {
        match self {
            SolveError::ExpressionParse { column, .. } => *column,
            _ => None,
        }
    }

    /// Shift a side-relative column so it points into the whole equation.
    pub fn offset(self, by: usize) -> Self {
        match self {
            SolveError::ExpressionParse { message, column: Some(col) } => {
                SolveError::ExpressionParse { message, column: Some(col + by) }
            }
            other => other,
        }
    }
}

/// Failures of the stepwise arithmetic helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    DivisionByZero,
    MissingOperand,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "Arithmetic error: division by zero is impossible"),
            ArithmeticError::MissingOperand => write!(f, "Arithmetic error: both numbers are required"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_no_variable_message() {
        let err = SolveError::NoVariable;
        assert!(format!("{}", err).starts_with("Equation contains no variable"));
    }
    #[test] fn test_malformed_message() {
        let err = SolveError::malformed("expected exactly one '='");
        assert_eq!(format!("{}", err), "Malformed equation: expected exactly one '='");
    }
    #[test] fn test_parse_error_with_column() {
        let err = SolveError::parse_at("unexpected '*'", 3);
        assert_eq!(format!("{}", err), "Expression error: unexpected '*' at column 3");
        assert_eq!(err.column(), Some(3));
    }
    #[test] fn test_offset_moves_column() {
        let err = SolveError::parse_at("unexpected ')'", 2).offset(4);
        assert_eq!(err.column(), Some(6));
        assert_eq!(SolveError::NoVariable.offset(4), SolveError::NoVariable);
    }
    #[test] fn test_arithmetic_messages() {
        assert_eq!(
            format!("{}", ArithmeticError::DivisionByZero),
            "Arithmetic error: division by zero is impossible"
        );
    }
}
