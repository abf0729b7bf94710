//! src/commands/batch.rs
//! Solve a file of equations, one per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::render::print_solution;
use crate::core::diagnostics::print_error;
use crate::core::solver::Solver;
use crate::core::source::{EquationSource, LineSource};

pub fn main(solver: &Solver, input: &Path, json: bool, pretty: bool) -> Result<i32> {
    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
        Box::new(BufReader::new(file))
    };
    let mut source = LineSource::new(reader);
    let (mut solved, mut failed) = (0usize, 0usize);

    while let Some(equation) = source.next_equation()? {
        if !json {
            println!("{}", format!("[{}:{}] {}", input.display(), source.line_no(), equation).dimmed());
        }
        match solver.solve(&equation) {
            Ok(solution) => {
                print_solution(&solution, json)?;
                solved += 1;
            }
            Err(e) => {
                if pretty {
                    print_error(&equation, &e);
                } else {
                    eprintln!("{} line {}: {}", "error:".bright_red(), source.line_no(), e);
                }
                failed += 1;
            }
        }
        if !json {
            println!();
        }
    }

    if !json {
        println!("{} solved, {} failed", solved, failed);
    }
    Ok(if failed == 0 { 0 } else { 1 })
}
