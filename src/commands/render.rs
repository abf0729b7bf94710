//! Terminal and JSON presentation of solutions and worked arithmetic.

use anyhow::Result;
use colored::Colorize;

use crate::core::arithmetic::Worked;
use crate::core::resolver::Resolution;
use crate::core::solver::Solution;

/// Plain-text trace: one step per line, phase headers highlighted.
pub fn solution_text(solution: &Solution) -> String {
    let mut out = String::new();
    for (i, step) in solution.steps.iter().enumerate() {
        if step.starts_with("  ") {
            out.push_str(step);
        } else if i + 1 == solution.steps.len() {
            out.push_str(&step.bright_green().bold().to_string());
        } else {
            out.push_str(&step.bright_white().to_string());
        }
        out.push('\n');
    }
    out
}

pub fn solution_json(solution: &Solution) -> Result<String> {
    let mut value = serde_json::to_value(solution)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("answer".into(), serde_json::Value::String(solution.answer()));
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn print_solution(solution: &Solution, json: bool) -> Result<()> {
    if json {
        println!("{}", solution_json(solution)?);
    } else {
        print!("{}", solution_text(solution));
        let marker = match solution.resolution {
            Resolution::Unique { .. } | Resolution::AllReals => "✔".green(),
            Resolution::NoSolution => "✘".red(),
            _ => "≈".yellow(),
        };
        println!("{} {}", marker, solution.answer().bold());
    }
    Ok(())
}

pub fn print_worked(worked: &Worked, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(worked)?);
        return Ok(());
    }
    println!("{}", format!("Worked {}", worked.operation.name()).bright_white().bold());
    for step in &worked.steps {
        println!("  {}", step);
    }
    if let Some(column) = &worked.column {
        println!();
        println!("{}", column);
    }
    println!("{} {}", "✔".green(), worked.result.bold());
    Ok(())
}
