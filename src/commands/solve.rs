//! src/commands/solve.rs
//! Solve one equation from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use super::render::{print_solution, solution_json};
use crate::core::diagnostics::print_error;
use crate::core::solver::Solver;
use crate::io::atomic::atomic_write;

/// Returns the process exit code: 0 solved, 1 rejected.
pub fn main_with_opts(
    solver: &Solver,
    equation: &str,
    out: Option<PathBuf>,
    json: bool,
    pretty: bool,
) -> Result<i32> {
    let solution = match solver.solve(equation) {
        Ok(s) => s,
        Err(e) => {
            if pretty {
                print_error(equation, &e);
            } else {
                eprintln!("{} {}", "error:".bright_red(), e);
            }
            return Ok(1);
        }
    };
    print_solution(&solution, json)?;
    if let Some(path) = out {
        atomic_write(&path, solution_json(&solution)?.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;
        if !json {
            println!("report written to {}", path.display());
        }
    }
    Ok(0)
}
