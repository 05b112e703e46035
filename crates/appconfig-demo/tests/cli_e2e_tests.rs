//! End-to-end tests that invoke the compiled `appconfig-demo` binary.
//!
//! Each test runs in a fresh temporary directory so the default
//! `polyverse.json` lookup only sees what the test wrote there.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// A temp directory holding a `polyverse.json` with a `crypto-proxy` node.
fn workdir_with_document(node: serde_json::Value) -> TempDir {
    let dir = TempDir::new().unwrap();
    let document = json!({ "crypto-proxy": node, "other-app": { "remote_addr": "wrong" } });
    fs::write(dir.path().join("polyverse.json"), document.to_string()).unwrap();
    dir
}

/// Every parameter name the demo declares, which doubles as its env var.
const PARAM_NAMES: &[&str] = &[
    "config",
    "config-node",
    "config-stdin",
    "use-env",
    "debug",
    "proxy-addr",
    "remote_addr",
    "statsd_addr",
    "ProxyRules",
    "buffer_size",
    "help",
];

fn demo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("appconfig-demo").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    for name in PARAM_NAMES {
        cmd.env_remove(name);
    }
    cmd
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn help_prints_usage_and_exits_zero() {
    // No document on disk: --help must not try to read it.
    let dir = TempDir::new().unwrap();

    demo(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: appconfig-demo [options]"))
        .stdout(predicate::str::contains("--debug"))
        .stdout(predicate::str::contains("-buffer_size"))
        .stdout(predicate::str::contains("(default: 1024)"));
}

#[test]
fn help_from_environment_prints_usage() {
    let dir = TempDir::new().unwrap();

    demo(&dir)
        .env("help", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("options:"));
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn resolves_document_node_environment_and_switches() {
    let dir = workdir_with_document(json!({
        "remote_addr": "backend:443",
        "ProxyRules": { "/": "index.js" },
        "buffer_size": 2048
    }));

    demo(&dir)
        .env("statsd_addr", "statsd:8125")
        .args(["-buffer_size=4096"])
        .assert()
        .success()
        .stdout(predicate::str::contains("param = remote_addr, value = backend:443, type = string"))
        .stdout(predicate::str::contains("param = statsd_addr, value = statsd:8125, type = string"))
        .stdout(predicate::str::contains("param = buffer_size, value = 4096, type = int"))
        .stdout(predicate::str::contains("param = proxy-addr, value = :8080, type = string"))
        .stdout(predicate::str::contains(r#"param = ProxyRules, value = {"/":"index.js"}, type = object"#));
}

#[test]
fn use_env_false_ignores_environment() {
    let dir = workdir_with_document(json!({
        "remote_addr": "backend:443",
        "ProxyRules": {}
    }));

    demo(&dir)
        .env("statsd_addr", "statsd:8125")
        .arg("-use-env=false")
        .assert()
        .success()
        .stdout(predicate::str::contains("param = statsd_addr, value = , type = string"));
}

#[test]
fn debug_prints_the_catalog_as_json() {
    let dir = workdir_with_document(json!({
        "remote_addr": "backend:443",
        "ProxyRules": {}
    }));

    demo(&dir)
        .arg("--debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("The following parameters have been defined:"))
        .stdout(predicate::str::contains(r#""name": "buffer_size""#));
}

#[test]
fn document_from_stdin_overrides_file() {
    let dir = workdir_with_document(json!({
        "remote_addr": "backend:443",
        "ProxyRules": {}
    }));

    demo(&dir)
        .arg("-config-stdin")
        .write_stdin(r#"{"crypto-proxy": {"remote_addr": "from-stdin:1"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("param = remote_addr, value = from-stdin:1"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn unknown_switch_fails_with_token() {
    let dir = TempDir::new().unwrap();

    demo(&dir)
        .arg("--bogus")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'--bogus' is not a supported flag"));
}

#[cfg(unix)]
#[test]
fn non_unicode_argument_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();

    demo(&dir)
        .arg(OsStr::from_bytes(b"\xff"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a supported flag"));
}

#[test]
fn missing_document_fails() {
    let dir = TempDir::new().unwrap();

    demo(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("polyverse.json"));
}

#[test]
fn missing_required_parameter_is_named() {
    let dir = workdir_with_document(json!({ "ProxyRules": {} }));

    demo(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required parameter 'remote_addr'"));
}

#[test]
fn missing_node_is_reported() {
    let dir = workdir_with_document(json!({}));

    demo(&dir)
        .arg("-config-node=absent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node 'absent' not found"));
}

#[test]
fn validator_rejects_zero_buffer() {
    let dir = workdir_with_document(json!({
        "remote_addr": "backend:443",
        "ProxyRules": {}
    }));

    demo(&dir)
        .arg("-buffer_size=0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("buffer_size"));
}
