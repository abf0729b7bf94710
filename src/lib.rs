// Library surface shared by the `eqstep` binary and the integration tests.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;

pub use crate::core::{solve, Resolution, Solution, SolveError, Solver, SolverOptions};
