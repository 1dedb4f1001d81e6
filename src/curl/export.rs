//! Curl command generation
//!
//! Converts a saved request into a cURL command line for sharing and
//! pasting into a terminal.

use tracing::debug;

use crate::curl::quoting::escape_shell_arg_for;
use crate::models::{HttpMethod, RequestDescriptor, ShellFlavor};

/// Generate an equivalent curl command from the request.
///
/// The URL comes right after `curl`, followed by `-X`, headers and body.
/// Bodies are only written for methods in [`HttpMethod::allows_body`].
pub fn to_curl_command(request: &RequestDescriptor, flavor: ShellFlavor) -> String {
    let mut parts: Vec<String> = vec!["curl".to_string()];

    let url = normalize_url(&request.url);
    if url.contains(' ') {
        parts.push(format!("\"{}\"", url));
    } else {
        parts.push(url);
    }

    if request.method != HttpMethod::Get {
        parts.push(format!("-X {}", request.method));
    }

    for (name, value) in &request.headers {
        parts.push(format!("-H \"{}: {}\"", name, escape_shell_arg_for(value, flavor)));
    }

    if let Some(body) = request.body.as_deref().filter(|b| !b.is_empty()) {
        if request.method.allows_body() {
            parts.push(format!("-d \"{}\"", escape_shell_arg_for(body, flavor)));
        } else {
            debug!(method = %request.method, "Body omitted for method without payload");
        }
    }

    let command = parts.join(" ");

    match flavor {
        ShellFlavor::Windows => command.replace('\n', "^\n"),
        ShellFlavor::Posix => command,
    }
}

/// Trim and add `http://` when no http(s) scheme is present
fn normalize_url(url: &str) -> String {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

/// Format curl command with syntax highlighting for terminal
pub fn format_curl_pretty(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 32);
    let mut rest = cmd;

    if let Some(tail) = cmd.strip_prefix("curl") {
        result.push_str("\x1b[1;33mcurl\x1b[0m"); // Bold yellow
        rest = tail;
    }

    let mut chars = rest.chars().peekable();
    let mut at_word_start = true;

    while let Some(c) = chars.next() {
        if c == '"' {
            result.push_str("\x1b[32m\""); // Green for strings
            while let Some(inner) = chars.next() {
                result.push(inner);
                if inner == '\\' {
                    if let Some(escaped) = chars.next() {
                        result.push(escaped);
                    }
                } else if inner == '"' {
                    break;
                }
            }
            result.push_str("\x1b[0m");
            at_word_start = false;
        } else if c == '-' && at_word_start {
            result.push_str("\x1b[36m-"); // Cyan for flags
            while let Some(&next) = chars.peek() {
                if next.is_alphanumeric() || next == '-' {
                    result.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            result.push_str("\x1b[0m");
            at_word_start = false;
        } else {
            at_word_start = c.is_whitespace();
            result.push(c);
        }
    }

    result
}
