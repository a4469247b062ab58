//! CLI module: argument parsing, output control, and command handlers

pub mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, PredictArgs, ScoreArgs};
pub use commands::run_command;
pub use logging::LogLevel;
