// src/core/diagnostics.rs
//! Pretty, colored diagnostics for a rejected equation.

use colored::Colorize;

use crate::core::error::SolveError;
use crate::core::normalizer::normalize;

pub struct Span {
    pub col: usize,
    pub len: usize, // underline length (use 1 if unknown)
}

impl Span {
    pub fn single(col: usize) -> Self {
        Self { col, len: 1 }
    }
}

/// Render the error with the normalized equation and a caret under `span`.
pub fn render_error(source: &str, title: &str, span: Option<Span>) -> String {
    let mut out = format!("{} {}\n", "error:".bright_red().bold(), title.bright_white());
    let Some(span) = span else {
        return out;
    };
    let line_text = normalize(source);
    out.push_str(&format!("  {} {}\n", "|".dimmed(), line_text));
    let underline = " ".repeat(span.col.saturating_sub(1)) + &"^".repeat(span.len.max(1));
    out.push_str(&format!("  {} {}\n", "|".dimmed(), underline.bright_red()));
    out
}

pub fn print_error(source: &str, err: &SolveError) {
    eprint!("{}", render_error(source, &err.to_string(), err.column().map(Span::single)));
}
