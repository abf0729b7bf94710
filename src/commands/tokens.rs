use anyhow::Result;
use colored::Colorize;

use crate::core::lexer::Lexer;
use crate::core::normalizer::normalize;

pub fn main(equation: &str) -> Result<i32> {
    let normalized = normalize(equation);
    println!("=== Normalized ===\n{}\n", normalized);
    match Lexer::new(&normalized).tokenize() {
        Ok(tokens) => {
            println!("=== Tokens ===");
            for token in &tokens {
                println!("{}", token);
            }
            Ok(0)
        }
        Err(e) => {
            eprintln!("{} Lexing error: {}", "error:".bright_red(), e);
            Ok(1)
        }
    }
}
