//! reqcurl library interface
//!
//! Converts saved HTTP requests to cURL command lines and back.
//!
//! # Module Organization
//!
//! - [`curl`] - Generator, parser and the shared shell-quoting model
//! - [`models`] - Request types (RequestDescriptor, HttpMethod, ShellFlavor)
//! - [`errors`] - Error types (ReqcurlError, Result)
//! - [`config`] - Config file loading
//! - [`core`] - Command-line dispatch
//!
//! ```
//! use reqcurl::curl::{from_curl_command, to_curl_command};
//! use reqcurl::models::{HttpMethod, RequestDescriptor, ShellFlavor};
//!
//! let request = RequestDescriptor::new(HttpMethod::Post, "https://a.com")
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("hello");
//! let command = to_curl_command(&request, ShellFlavor::Posix);
//! assert_eq!(command, r#"curl https://a.com -X POST -H "Content-Type: text/plain" -d "hello""#);
//! assert_eq!(from_curl_command(&command).unwrap(), request);
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod curl;
pub mod errors;
pub mod logging;
pub mod models;
pub mod status;
