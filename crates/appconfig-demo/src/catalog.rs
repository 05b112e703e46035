//! Parameters understood by the demo proxy.

use appconfig::{Catalog, ParamSpec};

pub const DEFAULT_DOCUMENT: &str = "polyverse.json";
pub const DEFAULT_NODE: &str = "crypto-proxy";

pub fn build() -> Catalog {
    Catalog::new()
        .with(
            ParamSpec::document_path("config")
                .default_value(DEFAULT_DOCUMENT)
                .usage("JSON configuration file."),
        )
        .with(
            ParamSpec::root_node("config-node")
                .default_value(DEFAULT_NODE)
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
        .with(
            ParamSpec::object("ProxyRules")
                .usage("Maps routes to javascript handler functions.")
                .required(),
        )
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
