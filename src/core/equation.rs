//! Splitting a normalized equation into its two sides.

use crate::core::error::SolveError;

#[derive(Debug, Clone, PartialEq)]
pub struct Sides {
    pub left: String,
    pub right: String,
    /// Characters before the first character of `right` (the `=` included).
    pub right_offset: usize,
}

impl Sides {
    /// An empty right side reads as the constant 0.
    pub fn right_or_zero(&self) -> &str {
        if self.right.is_empty() { "0" } else { &self.right }
    }
}

pub fn split_sides(normalized: &str) -> Result<Sides, SolveError> {
    let mut parts = normalized.split('=');
    let (left, right) = match (parts.next(), parts.next(), parts.next()) {
        (Some(l), Some(r), None) => (l, r),
        (_, None, _) => return Err(SolveError::malformed("the equation must contain an '=' sign")),
        _ => return Err(SolveError::malformed("the equation must contain exactly one '=' sign")),
    };
    if left.is_empty() {
        return Err(SolveError::malformed("the left side of '=' is empty"));
    }
    Ok(Sides {
        left: left.to_string(),
        right: right.to_string(),
        right_offset: left.chars().count() + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_equals() {
        let s = split_sides("2x+3=7").unwrap();
        assert_eq!((s.left.as_str(), s.right.as_str(), s.right_offset), ("2x+3", "7", 5));
    }

    #[test]
    fn empty_right_side_is_zero() {
        assert_eq!(split_sides("x+1=").unwrap().right_or_zero(), "0");
    }

    #[test]
    fn rejects_missing_and_repeated_equals() {
        assert!(matches!(split_sides("2x+3"), Err(SolveError::MalformedEquation(_))));
        assert!(matches!(split_sides("x=1=2"), Err(SolveError::MalformedEquation(_))));
        assert!(matches!(split_sides("=4"), Err(SolveError::MalformedEquation(_))));
    }
}
