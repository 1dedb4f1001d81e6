//! Environment struct (stdin, TTY state, colors)

use std::io::{self, Read, Stdin};

use crate::errors::ReqcurlError;

/// Execution environment
pub struct Environment {
    pub stdin: Stdin,
    pub stdin_isatty: bool,
    pub stdout_isatty: bool,
    pub colors: u32,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }

    /// Read all of stdin as text
    pub fn read_stdin(&mut self) -> Result<String, ReqcurlError> {
        let mut buf = String::new();
        self.stdin.read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Whether ANSI colors may be written to stdout
    pub fn use_colors(&self) -> bool {
        self.stdout_isatty && self.colors > 0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin: io::stdin(),
            stdin_isatty: atty::is(atty::Stream::Stdin),
            stdout_isatty: atty::is(atty::Stream::Stdout),
            colors: detect_color_support(),
            program_name: "reqcurl".to_string(),
        }
    }
}

/// Detect color support level
fn detect_color_support() -> u32 {
    if !atty::is(atty::Stream::Stdout) {
        return 0;
    }

    if std::env::var_os("NO_COLOR").is_some() {
        return 0;
    }

    match std::env::var("TERM") {
        Ok(term) if term == "dumb" => 0,
        Ok(term) if term.contains("256") => 256,
        _ => 16,
    }
}
