//! Core data types and type aliases
//!
//! This module defines the request shape exchanged between the cURL
//! transcoder and whatever stores or edits saved requests.
//!
//! # Why IndexMap?
//!
//! Headers are kept in an [`IndexMap`] so a generated command lists them in
//! the order the user entered them. Parsing does not promise any order, but
//! keeping source order costs nothing and makes output reproducible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ReqcurlError;

// =============================================================================
// TYPE ALIASES
// =============================================================================

/// Headers dictionary - header name to value, case preserved
pub type HeadersDict = IndexMap<String, String>;

// =============================================================================
// HTTP METHOD
// =============================================================================

/// The request methods a saved request can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 6] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    /// Uppercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the known set
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.to_uppercase();
        Self::ALL.into_iter().find(|m| m.as_str() == upper)
    }

    /// Whether a generated command carries `-d` for this method
    pub fn allows_body(&self) -> bool {
        matches!(
            self,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete | HttpMethod::Options
        )
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ReqcurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ReqcurlError::Argument(format!("Unsupported HTTP method: {}", s)))
    }
}

// =============================================================================
// REQUEST DESCRIPTOR
// =============================================================================

/// A saved HTTP request in structured form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestDescriptor {
    #[serde(default)]
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: HeadersDict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeadersDict::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Label used when an imported request is saved without a name.
    ///
    /// Uses the URL path when the URL parses, the raw URL text otherwise.
    pub fn default_name(&self) -> String {
        let target = match url::Url::parse(&self.url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => self.url.clone(),
        };
        format!("Imported request - {} {}", self.method, target)
    }
}

// =============================================================================
// SHELL FLAVOR
// =============================================================================

/// Line-continuation convention for generated commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShellFlavor {
    /// sh/bash/zsh: newlines are written as `\n` escapes
    #[default]
    Posix,
    /// cmd.exe: newlines are continued with `^`
    Windows,
}

impl ShellFlavor {
    /// Flavor matching the platform this binary runs on
    pub fn detect() -> Self {
        if cfg!(windows) {
            ShellFlavor::Windows
        } else {
            ShellFlavor::Posix
        }
    }
}

impl FromStr for ShellFlavor {
    type Err = ReqcurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" | "linux" | "darwin" | "sh" | "bash" => Ok(ShellFlavor::Posix),
            "windows" | "win32" | "cmd" => Ok(ShellFlavor::Windows),
            other => Err(ReqcurlError::Argument(format!("Unknown shell flavor: {}", other))),
        }
    }
}
