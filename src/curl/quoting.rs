//! Shell quoting shared by command generation and import
//!
//! Generation only ever writes double-quoted arguments, so [`escape_shell_arg`]
//! targets the inside of `"..."`. Import has to read whatever a user pasted,
//! so [`extract_argument`] understands bare words, single quotes (literal,
//! with the `'\''` idiom) and double quotes (backslash escapes).
//!
//! Every sequence the escaper writes is decoded by the extractor, which is
//! what lets a generated command be imported back unchanged.

use crate::errors::ReqcurlError;
use crate::models::ShellFlavor;

/// The `'\''` idiom: close quote, escaped literal quote, reopen quote
const EMBEDDED_SINGLE_QUOTE: [char; 4] = ['\'', '\\', '\'', '\''];

/// Escape a value for placement between double quotes (POSIX flavor)
pub fn escape_shell_arg(arg: &str) -> String {
    escape_shell_arg_for(arg, ShellFlavor::Posix)
}

/// Escape a value for placement between double quotes.
///
/// Each input character is mapped once, so a backslash introduced for one
/// character is never escaped again. On Windows, newlines stay literal and
/// are turned into `^` continuations by the generator.
pub fn escape_shell_arg_for(arg: &str, flavor: ShellFlavor) -> String {
    let mut out = String::with_capacity(arg.len() + 8);
    for c in arg.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '`' => out.push_str("\\`"),
            '\n' if flavor == ShellFlavor::Posix => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Read one argument starting at `start`.
///
/// Returns the decoded value and the index just past the consumed text, or
/// `None` when there is nothing to read at `start`. Running out of input
/// inside a quote is an [`ReqcurlError::UnclosedQuote`].
pub fn extract_argument(chars: &[char], start: usize) -> Result<Option<(String, usize)>, ReqcurlError> {
    match chars.get(start) {
        None => Ok(None),
        Some('\'') => extract_single_quoted(chars, start + 1).map(Some),
        Some('"') => extract_double_quoted(chars, start + 1).map(Some),
        Some(_) => Ok(extract_bare_word(chars, start)),
    }
}

/// Longest run of non-whitespace, taken literally
fn extract_bare_word(chars: &[char], start: usize) -> Option<(String, usize)> {
    let end = chars[start..]
        .iter()
        .position(|c| c.is_whitespace())
        .map(|offset| start + offset)
        .unwrap_or(chars.len());

    if end == start {
        return None;
    }

    Some((chars[start..end].iter().collect(), end))
}

/// Body of a `'...'` argument; `i` points just past the opening quote.
///
/// No backslash processing happens here. Only the four-character `'\''`
/// idiom embeds a literal quote; any other `'` ends the argument.
fn extract_single_quoted(chars: &[char], mut i: usize) -> Result<(String, usize), ReqcurlError> {
    let mut value = String::new();

    while let Some(&c) = chars.get(i) {
        if c == '\'' {
            if chars[i..].starts_with(&EMBEDDED_SINGLE_QUOTE) {
                value.push('\'');
                i += EMBEDDED_SINGLE_QUOTE.len();
                continue;
            }
            return Ok((value, i + 1));
        }
        value.push(c);
        i += 1;
    }

    Err(ReqcurlError::UnclosedQuote)
}

/// Body of a `"..."` argument; `i` points just past the opening quote.
fn extract_double_quoted(chars: &[char], mut i: usize) -> Result<(String, usize), ReqcurlError> {
    let mut value = String::new();

    while let Some(&c) = chars.get(i) {
        match c {
            '\\' => {
                let next = *chars.get(i + 1).ok_or(ReqcurlError::UnclosedQuote)?;
                match next {
                    '"' | '\\' | '$' | '`' => value.push(next),
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    _ => {
                        // Unknown escapes pass through untouched
                        value.push('\\');
                        value.push(next);
                    }
                }
                i += 2;
            }
            '"' => return Ok((value, i + 1)),
            _ => {
                value.push(c);
                i += 1;
            }
        }
    }

    Err(ReqcurlError::UnclosedQuote)
}
