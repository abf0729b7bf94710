//! Stepwise integer arithmetic: long multiplication, long division and
//! division with remainder, each with a worked trace.

use serde::Serialize;

use crate::core::error::ArithmeticError;
use crate::core::trace::StepTrace;

/// Decimal places long division produces before giving up on a repeating tail.
const DECIMAL_PLACES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Multiplication,
    Division,
    DivisionWithRemainder,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::DivisionWithRemainder => "division with remainder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worked {
    pub operation: Operation,
    pub steps: StepTrace,
    pub result: String,
    /// Column layout, for operations that have one.
    pub column: Option<String>,
}

/// Dispatch on `operation`; a missing operand is an error.
pub fn work(operation: Operation, a: Option<i64>, b: Option<i64>) -> Result<Worked, ArithmeticError> {
    let (Some(a), Some(b)) = (a, b) else {
        return Err(ArithmeticError::MissingOperand);
    };
    match operation {
        Operation::Multiplication => Ok(multiply(a, b)),
        Operation::Division => divide(a, b),
        Operation::DivisionWithRemainder => divide_with_remainder(a, b),
    }
}

pub fn multiply(a: i64, b: i64) -> Worked {
    let mut steps = StepTrace::new();
    let (x, y) = (a.unsigned_abs() as u128, b.unsigned_abs() as u128);
    steps.push(format!("Multiply {} × {}", a, b));

    let mut partials: Vec<u128> = Vec::new();
    let mut place: u128 = 1;
    let mut rest = y;
    while rest > 0 {
        let digit = rest % 10;
        if digit != 0 {
            let partial = x * digit * place;
            steps.push(format!("{} × {} = {}", x, digit * place, partial));
            partials.push(partial);
        }
        rest /= 10;
        place *= 10;
    }
    let magnitude: u128 = partials.iter().sum();
    if partials.len() > 1 {
        let joined: Vec<String> = partials.iter().map(|p| p.to_string()).collect();
        steps.push(format!("Add the partial products: {} = {}", joined.join(" + "), magnitude));
    }
    let negative = (a < 0) != (b < 0) && magnitude != 0;
    if a < 0 && b < 0 {
        steps.push("Both factors are negative, so the product is positive");
    } else if negative {
        steps.push("One factor is negative, so the product is negative");
    }
    let result = if negative { format!("-{}", magnitude) } else { magnitude.to_string() };
    steps.push(format!("Answer: {} × {} = {}", a, b, result));

    let column = Some(multiplication_column(x, y, &partials, magnitude));

    Worked { operation: Operation::Multiplication, steps, result, column }
}

pub fn divide(a: i64, b: i64) -> Result<Worked, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    let mut steps = StepTrace::new();
    steps.push(format!("Divide {} ÷ {}", a, b));
    let divisor = b.unsigned_abs() as u128;
    let (quotient, mut remainder) = long_division(a.unsigned_abs() as u128, divisor, &mut steps);

    let mut decimals = String::new();
    while remainder != 0 && decimals.len() < DECIMAL_PLACES {
        let current = remainder * 10;
        let digit = current / divisor;
        remainder = current % divisor;
        steps.push(format!(
            "Append 0: {} ÷ {} = {}, remainder {}",
            current, divisor, digit, remainder
        ));
        decimals.push(char::from(b'0' + digit as u8));
    }

    let sign = if (a < 0) != (b < 0) && (quotient != 0 || !decimals.is_empty()) { "-" } else { "" };
    let mut result = format!("{}{}", sign, quotient);
    if !decimals.is_empty() {
        result.push('.');
        result.push_str(&decimals);
    }
    if remainder != 0 {
        result = format!("≈{}", result);
    }
    steps.push(format!("Answer: {} ÷ {} = {}", a, b, result));
    Ok(Worked { operation: Operation::Division, steps, result, column: None })
}

pub fn divide_with_remainder(a: i64, b: i64) -> Result<Worked, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    let mut steps = StepTrace::new();
    steps.push(format!("Divide {} ÷ {} with remainder", a, b));
    long_division(a.unsigned_abs() as u128, b.unsigned_abs() as u128, &mut steps);

    let (a, b) = (a as i128, b as i128);
    let (quotient, remainder) = (a.div_euclid(b), a.rem_euclid(b));
    if a < 0 || b < 0 {
        steps.push(format!(
            "Adjust for the signs so the remainder is not negative: quotient {}, remainder {}",
            quotient, remainder
        ));
    }
    steps.push(format!("Check: {} × {} + {} = {}", quotient, b, remainder, quotient * b + remainder));
    let result = format!("{} remainder {}", quotient, remainder);
    steps.push(format!("Answer: {} ÷ {} = {}", a, b, result));
    Ok(Worked { operation: Operation::DivisionWithRemainder, steps, result, column: None })
}

/// Digit-by-digit division of non-negative integers; returns (quotient, remainder).
fn long_division(dividend: u128, divisor: u128, steps: &mut StepTrace) -> (u128, u128) {
    let mut quotient: u128 = 0;
    let mut remainder: u128 = 0;
    for digit in dividend.to_string().bytes().map(|d| (d - b'0') as u128) {
        let current = remainder * 10 + digit;
        let q = current / divisor;
        remainder = current % divisor;
        quotient = quotient * 10 + q;
        steps.push(format!(
            "Bring down {}: {} ÷ {} = {}, remainder {}",
            digit, current, divisor, q, remainder
        ));
    }
    (quotient, remainder)
}

/// Long multiplication laid out in columns, partial products right-aligned.
fn multiplication_column(x: u128, y: u128, partials: &[u128], total: u128) -> String {
    let digits = [x, y, total]
        .iter()
        .chain(partials)
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(1);
    let w = digits + 2;
    let rule = "-".repeat(w);
    let mut out = vec![format!("{:>w$}", x, w = w), format!("×{:>w$}", y, w = w - 1), rule.clone()];
    if partials.len() > 1 {
        out.extend(partials.iter().map(|p| format!("{:>w$}", p, w = w)));
        out.push(rule);
    }
    out.push(format!("{:>w$}", total, w = w));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_multiplication_partials() {
        let w = multiply(123, 45);
        assert_eq!(w.result, "5535");
        assert!(w.steps.iter().any(|s| s == "123 × 5 = 615"));
        assert!(w.steps.iter().any(|s| s == "123 × 40 = 4920"));
        assert_eq!(
            w.column.as_deref(),
            Some("   123\n×   45\n------\n   615\n  4920\n------\n  5535")
        );
    }

    #[test]
    fn negative_product_sign() {
        assert_eq!(multiply(-6, 7).result, "-42");
        assert_eq!(multiply(-6, -7).result, "42");
        assert_eq!(multiply(0, -7).result, "0");
    }
}
