//! Integration tests for the `parse` command (curl import)

mod common;

use common::{create_temp_file, reqcurl, reqcurl_with_env, ExitStatus, MockEnvironment};
use serde_json::json;

// =============================================================================
// Curl Import - Basic Tests
// =============================================================================

#[test]
fn test_curl_import_simple_get() {
    let r = reqcurl(&["parse", "curl https://a.com"]);

    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    assert_eq!(
        r.json(),
        json!({
            "name": "Imported request - GET /",
            "method": "GET",
            "url": "https://a.com",
            "headers": {}
        })
    );
}

#[test]
fn test_curl_import_post_json() {
    let r = reqcurl(&[
        "parse",
        r#"curl -X POST -H 'Content-Type: application/json' -d '{"name":"Test"}' https://api.example.com/create"#,
    ]);

    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    let body = r.json();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["url"], "https://api.example.com/create");
    assert_eq!(body["headers"]["Content-Type"], "application/json");
    assert_eq!(body["body"], r#"{"name":"Test"}"#);
    assert_eq!(body["name"], "Imported request - POST /create");
}

#[test]
fn test_curl_import_compact_output() {
    let r = reqcurl(&["parse", "--compact", "curl https://a.com/x"]);

    assert_eq!(r.exit_status, ExitStatus::Success);
    assert_eq!(r.stdout.lines().count(), 1);
}

// =============================================================================
// Curl Import - Input Sources
// =============================================================================

#[test]
fn test_curl_import_from_stdin_multiline() {
    let mut env = MockEnvironment::new();
    env.set_stdin("curl https://a.com/items \\\n  -X PUT \\\n  -H 'X-Id: 7'\n");
    let r = reqcurl_with_env(&["parse"], &env);

    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    let body = r.json();
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["headers"]["X-Id"], "7");
}

#[test]
fn test_curl_import_from_file() {
    let (_dir, path) = create_temp_file("cmd.txt", "curl -X DELETE https://a.com/items/1\n");
    let r = reqcurl(&["parse", "--file", path.to_str().unwrap()]);

    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);
    assert_eq!(r.json()["method"], "DELETE");
}

#[test]
fn test_curl_import_missing_file() {
    let r = reqcurl(&["parse", "--file", "/definitely/not/here.txt"]);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("IO error"), "stderr: {}", r.stderr);
}

#[test]
fn test_curl_import_blank_input() {
    let mut env = MockEnvironment::new();
    env.set_stdin("   \n");
    let r = reqcurl_with_env(&["parse"], &env);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("Please enter a cURL command"), "stderr: {}", r.stderr);
}

// =============================================================================
// Curl Import - Failures
// =============================================================================

#[test]
fn test_curl_import_missing_prefix() {
    let r = reqcurl(&["parse", "wget https://a.com"]);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(
        r.stderr.contains(r#"Invalid cURL command: must start with "curl""#),
        "stderr: {}",
        r.stderr
    );
    assert!(r.stdout.is_empty());
}

#[test]
fn test_curl_import_missing_url() {
    let r = reqcurl(&["parse", "curl -X GET"]);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("Invalid cURL command: URL is required"), "stderr: {}", r.stderr);
}

#[test]
fn test_curl_import_unclosed_quote() {
    let r = reqcurl(&["parse", r#"curl https://a.com -H "X: y"#]);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("Unclosed quote in cURL command"), "stderr: {}", r.stderr);
}

#[test]
fn test_curl_import_traceback_shows_variant() {
    let r = reqcurl(&["parse", "--traceback", "curl -X GET"]);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("MissingUrl"), "stderr: {}", r.stderr);
}
