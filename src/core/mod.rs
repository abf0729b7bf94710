//! Core module tree: the equation reducer and its helpers.
//! Only declare modules that exist in the src/core/ directory.

#[macro_use]
pub mod debug; // gated debug logging (EQSTEP_DEBUG=1) provides debug_log! macro

pub mod arithmetic;
pub mod ast;
pub mod diagnostics;
pub mod equation;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod linear;
pub mod normalizer;
pub mod parser;
pub mod resolver;
pub mod solver;
pub mod source;
pub mod token;
pub mod trace;
pub mod variables;

pub use error::SolveError;
pub use linear::{decompose, LinearForm};
pub use resolver::Resolution;
pub use solver::{solve, Solution, Solver, SolverOptions};
pub use token::TokenKind;
