//! Command-line interface (only used by the binary)

pub mod args;
pub mod commands;

pub use args::{Args, Commands};
pub use commands::run_command;
