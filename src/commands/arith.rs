use anyhow::Result;
use colored::Colorize;

use super::render::print_worked;
use crate::core::arithmetic::{work, Operation};

pub fn main(op: Operation, a: i64, b: i64, json: bool) -> Result<i32> {
    match work(op, Some(a), Some(b)) {
        Ok(worked) => {
            print_worked(&worked, json)?;
            Ok(0)
        }
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red(), e);
            Ok(1)
        }
    }
}
