pub mod commands;
pub mod interactive;
pub mod output;

pub use commands::{Cli, Commands, OutputArgs, OutputFormat};
