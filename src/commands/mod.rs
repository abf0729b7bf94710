pub mod arith;
pub mod batch;
pub mod render;
pub mod settings;
pub mod solve;
pub mod tokens;
