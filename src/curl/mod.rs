//! cURL command interchange
//!
//! Two directions over one quoting model:
//!
//! - **Export**: a saved request becomes a `curl` command line
//! - **Import**: a pasted `curl` command line becomes a saved request
//!
//! ```bash
//! # Export
//! reqcurl generate -X POST https://api.example.com/users -H 'Content-Type: application/json' -d '{"name":"John"}'
//!
//! # Output:
//! # curl https://api.example.com/users -X POST -H "Content-Type: application/json" -d "{\"name\":\"John\"}"
//!
//! # Import
//! reqcurl parse "curl -X POST -H 'Content-Type: application/json' -d '{\"name\":\"John\"}' https://api.example.com/users"
//! ```
//!
//! Both directions are plain functions without shared state.

pub mod export;
pub mod import;
pub mod quoting;

pub use export::{format_curl_pretty, to_curl_command};
pub use import::from_curl_command;
pub use quoting::{escape_shell_arg, escape_shell_arg_for, extract_argument};
