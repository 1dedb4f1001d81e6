//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for reqcurl.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::ShellFlavor;

/// reqcurl - convert between saved HTTP requests and cURL commands
#[derive(Parser, Debug, Clone)]
#[command(name = "reqcurl", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    // =========================================================================
    // OUTPUT & LOGGING
    // =========================================================================

    /// Output format for structured logging: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Show error details on failure
    #[arg(long = "traceback", action = ArgAction::SetTrue, global = true)]
    pub traceback: bool,

    /// Debug logging (implies --traceback)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Print shell completions and exit
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum)]
    pub generate_completions: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the curl command for a request
    Generate(GenerateArgs),
    /// Read a curl command and print the request as JSON
    Parse(ParseArgs),
}

/// Request to turn into a curl command
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Request URL (http:// is added when no scheme is given)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// HTTP method: GET, POST, PUT, DELETE, OPTIONS or HEAD
    #[arg(short = 'X', long = "request", value_name = "METHOD")]
    pub method: Option<String>,

    /// Request header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(short = 'd', long = "data", value_name = "BODY", allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Read the request as JSON from FILE ("-" for stdin); flags override it
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Shell the command is meant for (defaults to config, then the host platform)
    #[arg(long = "shell", value_name = "SHELL", value_enum)]
    pub shell: Option<ShellFlavor>,

    /// Colorize the command when writing to a terminal
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pub pretty: bool,
}

/// Where to read the curl command from
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ParseArgs {
    /// The curl command (read from stdin when omitted)
    #[arg(value_name = "COMMAND", conflicts_with = "file")]
    pub command: Option<String>,

    /// Read the curl command from a file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long = "compact", action = ArgAction::SetTrue)]
    pub compact: bool,
}

/// Log format for structured output (CI/CD)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
