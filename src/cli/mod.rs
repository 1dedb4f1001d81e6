//! CLI argument parsing and processing

pub mod args;
pub mod process;

// Re-exports
pub use args::{Args, Command, GenerateArgs, LogFormat, ParseArgs};
pub use process::build_request;
