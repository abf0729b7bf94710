use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::arithmetic::Operation;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ArithKind {
    #[clap(alias = "multiply", alias = "x")]
    Mul,
    #[clap(alias = "divide")]
    Div,
    #[clap(alias = "rem")]
    Divmod,
}

impl From<ArithKind> for Operation {
    fn from(kind: ArithKind) -> Self {
        match kind {
            ArithKind::Mul => Operation::Multiplication,
            ArithKind::Div => Operation::Division,
            ArithKind::Divmod => Operation::DivisionWithRemainder,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "eqstep",
    about = "Step-by-step linear equation solver",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct EqstepCli {
    /// Global: caret-underlined diagnostics
    #[arg(long = "pretty-errors", action = ArgAction::SetTrue, global = true)]
    pub pretty_errors: bool,

    /// Global: print results as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: path to config (TOML); default: ~/.eqstep/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Shorthand: `eqstep "2x+3=7"` behaves like `eqstep solve`
    #[arg(value_name = "EQUATION")]
    pub equation_pos: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve one equation and print the steps
    ///
    /// Examples:
    ///   eqstep solve 2x + 3 = 7
    ///   eqstep solve "3x+2x-1=9" --out report.json
    ///   eqstep solve -- -x = 3
    Solve {
        /// Equation text; several words are joined with spaces.
        /// Put `--` first when the equation starts with a minus sign.
        #[arg(value_name = "EQUATION", required = true, num_args = 1.., allow_negative_numbers = true)]
        words: Vec<String>,

        /// Also write the JSON report to FILE
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Solve every equation in a file (one per line, `-` for stdin)
    Batch {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Worked integer arithmetic
    Arith {
        #[arg(value_enum, value_name = "OP")]
        op: ArithKind,
        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: i64,
        #[arg(value_name = "B", allow_hyphen_values = true)]
        b: i64,
    },

    /// Debug helper: dump the tokens of a normalized equation
    Tokens {
        #[arg(value_name = "EQUATION", required = true, num_args = 1.., allow_negative_numbers = true)]
        words: Vec<String>,
    },

    /// Show the effective settings, or write them to the config path
    Config {
        #[arg(long = "init", action = ArgAction::SetTrue)]
        init: bool,
    },

    /// Interactive prompt (default when no arguments are given)
    Repl,
}
