//! Scenario tests: the sample catalog resolved against on-disk fixtures.
//!
//! Fixtures live in `test-fixtures/documents/` at the workspace root.

use appconfig::{ConfigValue, Error, Inputs, ParamKind, Resolver};
use appconfig_test_utils::{env, sample_catalog};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/documents")
        .join(name)
        .to_str()
        .unwrap()
        .to_string()
}

fn config_arg(name: &str) -> String {
    format!("-config={}", fixture(name))
}

// ============================================================================
// Mission 1: one file, several applications
// ============================================================================

#[test]
fn multi_app_document_is_scoped_to_default_node() {
    let catalog = sample_catalog();
    let config = Resolver::new(&catalog)
        .resolve(Inputs::new([config_arg("multi-app.json")]))
        .unwrap();

    assert_eq!(config.get_string("proxy-addr"), ":9090");
    assert_eq!(config.get_string("remote_addr"), "backend.internal:443");
    assert_eq!(config.get_int("buffer_size"), 8192);
    assert!(config.get_bool("debug"));
    assert_eq!(
        config.get("ProxyRules").map(ConfigValue::to_json),
        Some(json!({"/": "index.js", "/api": "api.js"}))
    );
    // statsd_addr lives under another node.
    assert_eq!(config.get_string("statsd_addr"), "");
}

#[test]
fn switching_node_selects_other_application() {
    let catalog = sample_catalog();
    let config = Resolver::new(&catalog)
        .resolve(Inputs::new([
            config_arg("multi-app.json"),
            "-config-node=statsd".to_string(),
            "-remote_addr=cli:1".to_string(),
        ]))
        .unwrap();

    assert_eq!(config.get_string("statsd_addr"), "statsd.internal:8125");
    assert_eq!(config.get_string("proxy-addr"), ":8080");
    assert_eq!(config.get_string("remote_addr"), "cli:1");
}

#[test]
fn empty_node_uses_whole_document() {
    let catalog = sample_catalog();
    let config = Resolver::new(&catalog)
        .resolve(Inputs::new([config_arg("flat.json"), "-config-node=".to_string()]))
        .unwrap();

    assert_eq!(config.get_string("remote_addr"), "flat.internal:80");
    // A JSON string for an int parameter is converted like any other string.
    assert_eq!(config.get_int("buffer_size"), 2048);
}

// ============================================================================
// Mission 2: precedence across every layer
// ============================================================================

#[test]
fn every_layer_overrides_the_one_below() {
    let catalog = sample_catalog();
    let config = Resolver::new(&catalog)
        .resolve(
            Inputs::new([config_arg("multi-app.json"), "-config-stdin".to_string(), "-buffer_size=64".to_string()])
                .env(env(&[("proxy-addr", ":7000"), ("buffer_size", "32")]))
                .stdin(r#"{"crypto-proxy": {"remote_addr": "stdin:2", "proxy-addr": ":6000"}}"#.as_bytes()),
        )
        .unwrap();

    // file < stdin
    assert_eq!(config.get_string("remote_addr"), "stdin:2");
    // stdin < env
    assert_eq!(config.get_string("proxy-addr"), ":7000");
    // env < cli
    assert_eq!(config.get_int("buffer_size"), 64);
    // file only
    assert!(config.get_bool("debug"));
}

#[test]
fn environment_can_point_at_the_document() {
    let catalog = sample_catalog();
    let config = Resolver::new(&catalog)
        .resolve(Inputs::new(Vec::<String>::new()).env(env(&[
            ("config", fixture("multi-app.json").as_str()),
            ("config-node", "crypto-proxy"),
        ])))
        .unwrap();

    assert_eq!(config.get_string("remote_addr"), "backend.internal:443");
}

// ============================================================================
// Mission 3: failures name what went wrong
// ============================================================================

#[rstest]
#[case("truncated.json")]
#[case("not-an-object.json")]
fn malformed_documents_are_rejected(#[case] name: &str) {
    let catalog = sample_catalog();
    let err = Resolver::new(&catalog)
        .resolve(Inputs::new([config_arg(name)]))
        .unwrap_err();

    match err {
        Error::DocumentMalformed { source_name, .. } => assert!(source_name.ends_with(name)),
        other => panic!("expected DocumentMalformed, got {other:?}"),
    }
}

#[test]
fn unknown_node_is_reported() {
    let catalog = sample_catalog();
    let err = Resolver::new(&catalog)
        .resolve(Inputs::new([config_arg("multi-app.json"), "-config-node=web".to_string()]))
        .unwrap_err();

    assert_eq!(err.subject(), Some("web"));
}

#[test]
fn missing_required_parameter_after_all_layers() {
    let catalog = sample_catalog();
    let err = Resolver::new(&catalog)
        .resolve(Inputs::new([config_arg("multi-app.json"), "-config-node=statsd".to_string()]))
        .unwrap_err();

    assert!(
        matches!(err, Error::MissingRequiredParameter { ref name } if name == "remote_addr"),
        "got: {err:?}"
    );
}

// ============================================================================
// Mission 4: introspection for help output
// ============================================================================

#[test]
fn help_lists_every_switch() {
    let catalog = sample_catalog();
    let config = Resolver::new(&catalog)
        .resolve(Inputs::new(["--help"]))
        .unwrap();

    assert_eq!(config.usage_requested(), Some("help"));
    let usage = config.render_usage("options:\n");
    for switch in config.all_keys_with_prefix().values() {
        assert!(usage.contains(switch.as_str()), "{switch} missing from:\n{usage}");
    }
    assert_eq!(config.keys_by_kind(ParamKind::UsageFlag), ["help"]);
    assert_eq!(usage.lines().count(), catalog.len() + 1);
}
