//! The sample application catalog.

use appconfig::{Catalog, ParamSpec};

/// Catalog of a small proxy service, exercising every parameter kind.
///
/// | name          | kind                | notes                          |
/// |---------------|---------------------|--------------------------------|
/// | `config`      | document path       | default `polyverse.json`       |
/// | `config-node` | root node           | default `crypto-proxy`         |
/// | `config-stdin`| stdin document flag |                                |
/// | `use-env`     | read-env flag       | default `true`                 |
/// | `debug`       | bool                | prefix `--`, default `false`   |
/// | `proxy-addr`  | string              | required, default `:8080`      |
/// | `remote_addr` | string              | required                       |
/// | `statsd_addr` | string              |                                |
/// | `ProxyRules`  | object              |                                |
/// | `buffer_size` | int                 | default `1024`, must be > 0    |
/// | `help`        | usage flag          | prefix `--`                    |
///
/// `config` points at a path relative to the working directory, so tests
/// normally override it with `-config=<path>` or `-config=`.
///
/// This is the demo binary's catalog with `ProxyRules` optional, so
/// documents for other nodes resolve without it.
pub fn sample_catalog() -> Catalog {
    Catalog::new()
        .with(
            ParamSpec::document_path("config")
                .default_value("polyverse.json")
                .usage("JSON configuration file."),
        )
        .with(
            ParamSpec::root_node("config-node")
                .default_value("crypto-proxy")
                .usage("Node within the configuration file."),
        )
        .with(
            ParamSpec::document_from_stdin("config-stdin")
                .usage("Also read a JSON configuration from standard input."),
        )
        .with(
            ParamSpec::read_env_flag("use-env")
                .default_value(true)
                .usage("Read parameters from environment variables."),
        )
        .with(
            ParamSpec::bool("debug")
                .default_value(false)
                .usage("Debug mode.")
                .prefix("--"),
        )
        .with(
            ParamSpec::string("proxy-addr")
                .default_value(":8080")
                .usage("Listen on [address]:port.")
                .required(),
        )
        .with(
            ParamSpec::string("remote_addr")
                .usage("Remote address[:port].")
                .required(),
        )
        .with(ParamSpec::string("statsd_addr").usage("StatsD address:port."))
        .with(ParamSpec::object("ProxyRules").usage("Maps routes to javascript handler functions."))
        .with(
            ParamSpec::int("buffer_size")
                .default_value(1024)
                .usage("Read buffer size in bytes.")
                .validate(|value| value.as_i64().is_some_and(|size| size > 0)),
        )
        .with(
            ParamSpec::usage_flag("help")
                .usage("Prints usage.")
                .prefix("--"),
        )
}
