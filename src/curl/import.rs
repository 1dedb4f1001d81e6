//! cURL command import/parsing
//!
//! Turns a pasted curl command back into a [`RequestDescriptor`].
//!
//! Only `-X`/`--request`, `-H`/`--header`, `-d`/`--data`/`--data-raw` and
//! the URL are understood. Anything else is stepped over one character at a
//! time, so unknown flags vanish instead of failing the import. This is a
//! known quirk: a misspelled flag is silently lost.
//!
//! # Example
//!
//! ```
//! use reqcurl::curl::from_curl_command;
//! use reqcurl::models::HttpMethod;
//!
//! let req = from_curl_command("curl -X POST https://api.example.com -d 'a=1'").unwrap();
//! assert_eq!(req.method, HttpMethod::Post);
//! assert_eq!(req.body.as_deref(), Some("a=1"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::curl::quoting::extract_argument;
use crate::errors::ReqcurlError;
use crate::models::{HeadersDict, HttpMethod, RequestDescriptor};

/// Backslash (POSIX) or caret (cmd.exe) line continuation.
///
/// Applied inside quotes too, so a literal `^` before a newline is lost.
static CONTINUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\\^][ \t]*\r?\n").expect("Invalid continuation regex")
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// Flags that carry one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Method,
    Header,
    Data,
}

const FLAGS: &[(&str, Flag)] = &[
    ("-X", Flag::Method),
    ("--request", Flag::Method),
    ("-H", Flag::Header),
    ("--header", Flag::Header),
    ("-d", Flag::Data),
    ("--data", Flag::Data),
    ("--data-raw", Flag::Data),
];

/// Parse a curl command string into a request
pub fn from_curl_command(input: &str) -> Result<RequestDescriptor, ReqcurlError> {
    let command = preprocess(input);
    let rest = strip_command_name(&command).ok_or(ReqcurlError::MissingCommandPrefix)?;
    let chars: Vec<char> = rest.trim_start().chars().collect();

    let mut method = HttpMethod::Get;
    let mut url = String::new();
    let mut headers = HeadersDict::new();
    let mut body: Option<String> = None;

    let mut i = 0;
    while i < chars.len() {
        if let Some((flag, len)) = match_flag(&chars, i) {
            i = skip_whitespace(&chars, i + len);

            let Some((value, end)) = extract_argument(&chars, i)? else {
                debug!(?flag, "Flag without argument at end of command");
                continue;
            };
            i = end;
            trace!(?flag, %value, "Recognized flag");

            match flag {
                Flag::Method => match HttpMethod::parse(&value) {
                    Some(m) => method = m,
                    None => debug!(method = %value, "Ignoring unsupported method"),
                },
                Flag::Header => match parse_header(&value) {
                    Some((name, val)) => {
                        headers.insert(name, val);
                    }
                    None => debug!(header = %value, "Dropping malformed header"),
                },
                Flag::Data => body = Some(value),
            }
        } else if url.is_empty() && starts_url(&chars[i..]) {
            match extract_argument(&chars, i)? {
                Some((value, end)) => {
                    url = value;
                    i = end;
                }
                None => i += 1,
            }
        } else {
            i += 1;
        }
    }

    if url.is_empty() {
        return Err(ReqcurlError::MissingUrl);
    }

    let request = RequestDescriptor { method, url, headers, body };
    trace!(?request, "Parsed curl command");
    Ok(request)
}

/// Undo line continuations and squeeze whitespace
fn preprocess(input: &str) -> String {
    let joined = CONTINUATION_RE.replace_all(input.trim(), " ");
    WHITESPACE_RE.replace_all(&joined, " ").into_owned()
}

/// Text after a leading `curl` word, if there is one
fn strip_command_name(command: &str) -> Option<&str> {
    let rest = command.strip_prefix("curl")?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

/// A recognized flag starting exactly at `i`, as a whole word.
///
/// Both ends must touch whitespace, so `-d` inside `--foo-d` and `--data`
/// at the front of `--data-raw` are not matches.
fn match_flag(chars: &[char], i: usize) -> Option<(Flag, usize)> {
    if i > 0 && !chars[i - 1].is_whitespace() {
        return None;
    }

    FLAGS.iter().find_map(|&(name, flag)| {
        let len = name.chars().count();
        let matches_name = chars.len() >= i + len && chars[i..i + len].iter().copied().eq(name.chars());
        let ends_word = chars.get(i + len).map_or(true, |c| c.is_whitespace());
        (matches_name && ends_word).then_some((flag, len))
    })
}

fn starts_url(rest: &[char]) -> bool {
    let starts_with = |prefix: &str| {
        rest.len() >= prefix.len() && rest.iter().take(prefix.len()).copied().eq(prefix.chars())
    };
    matches!(rest.first(), Some('"') | Some('\'')) || starts_with("http://") || starts_with("https://")
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }
    i
}

/// Parse a header string "Name: Value"
fn parse_header(header: &str) -> Option<(String, String)> {
    let (name, value) = header.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
