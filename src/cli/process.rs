//! Post-processing argument logic
//!
//! Turns `generate` arguments into a [`RequestDescriptor`], optionally
//! starting from a JSON request read from a file or stdin.

use std::path::Path;

use tracing::debug;

use crate::cli::args::GenerateArgs;
use crate::context::Environment;
use crate::errors::ReqcurlError;
use crate::models::{HttpMethod, RequestDescriptor};

/// Build the request described by `generate` arguments
pub fn build_request(args: &GenerateArgs, env: &mut Environment) -> Result<RequestDescriptor, ReqcurlError> {
    let base = match &args.input {
        Some(path) => Some(read_request_json(path, env)?),
        None => None,
    };
    apply_flags(base, args)
}

/// Overlay command-line flags on an optional base request
pub fn apply_flags(base: Option<RequestDescriptor>, args: &GenerateArgs) -> Result<RequestDescriptor, ReqcurlError> {
    let mut request = base.unwrap_or_default();

    if let Some(url) = &args.url {
        request.url = url.clone();
    }
    if request.url.trim().is_empty() {
        return Err(ReqcurlError::Argument("URL is required".to_string()));
    }

    if let Some(method) = &args.method {
        request.method = method.parse::<HttpMethod>()?;
    }

    for header in &args.headers {
        let (name, value) = parse_header_arg(header)?;
        request.headers.insert(name, value);
    }

    if let Some(data) = &args.data {
        request.body = Some(data.clone());
    }

    Ok(request)
}

fn read_request_json(path: &Path, env: &mut Environment) -> Result<RequestDescriptor, ReqcurlError> {
    let content = if path == Path::new("-") {
        env.read_stdin()?
    } else {
        std::fs::read_to_string(path)?
    };
    debug!(path = %path.display(), bytes = content.len(), "Read request JSON");
    Ok(serde_json::from_str(&content)?)
}

/// Parse a "Name: value" header argument
fn parse_header_arg(header: &str) -> Result<(String, String), ReqcurlError> {
    match header.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ReqcurlError::Argument(format!(
            "Invalid header '{}' (expected Name: value)",
            header
        ))),
    }
}
