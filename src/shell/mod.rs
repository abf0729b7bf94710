use colored::Colorize;
use std::io::{self, Write};

use crate::commands::render::{print_solution, print_worked};
use crate::config::Settings;
use crate::core::arithmetic::{work, Operation};
use crate::core::diagnostics::print_error;
use crate::core::solver::Solver;

pub fn start(solver: &Solver, settings: &Settings, json: bool) -> anyhow::Result<()> {
    banner();

    loop {
        // Prompt
        print!("{} ", "eqstep ›".bold().truecolor(0, 180, 225));
        io::stdout().flush().ok();

        // Read line
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        let cmd = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match cmd {
            "help" | "?" => print_help(),
            "exit" | "quit" => break,
            "config" => print!("{}", settings.to_toml()?),
            "mul" | "div" | "divmod" => {
                let op = match cmd {
                    "mul" => Operation::Multiplication,
                    "div" => Operation::Division,
                    _ => Operation::DivisionWithRemainder,
                };
                let a = args.first().and_then(|s| s.parse::<i64>().ok());
                let b = args.get(1).and_then(|s| s.parse::<i64>().ok());
                match work(op, a, b) {
                    Ok(worked) => print_worked(&worked, json)?,
                    Err(e) => eprintln!("{} {}", "err:".red().bold(), e),
                }
            }
            // Anything else is an equation.
            _ => match solver.solve(line) {
                Ok(solution) => print_solution(&solution, json)?,
                Err(e) => print_error(line, &e),
            },
        }
    }
    Ok(())
}

fn banner() {
    println!(
        "\n{}\n{}",
        "eqstep · step-by-step linear equations".truecolor(0, 180, 225).bold(),
        "type an equation such as 2x + 3 = 7, or 'help'".dimmed()
    );
}

fn print_help() {
    println!(
        "{}\n  {}\n  {}\n  {}\n  {}\n  {}",
        "commands:".yellow().bold(),
        "<equation>          solve, e.g. 3x + 2x - 1 = 9",
        "mul|div|divmod A B  worked integer arithmetic",
        "config              show effective settings",
        "help                this text",
        "exit                leave"
    );
}
