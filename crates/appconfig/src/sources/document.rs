//! JSON document loading
//!
//! A document is a single JSON object. When a root node is selected, the
//! object stored under that key becomes the effective scope, which lets one
//! file carry the configuration of several applications:
//!
//! ```json
//! {
//!   "crypto-proxy": { "proxy-addr": ":8080" },
//!   "statsd":       { "port": 8125 }
//! }
//! ```

use super::DocumentOpener;
use crate::value::{ConfigMap, ConfigValue};
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Display name used for documents read from standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Decode the first JSON value in `reader` as an object and apply the
/// optional root node. Anything after that first value is not read.
///
/// `source_name` only labels errors and log events.
pub fn load(reader: impl Read, source_name: &str, root_node: Option<&str>) -> Result<ConfigMap> {
    let decoded: serde_json::Value = serde_json::Deserializer::from_reader(reader)
        .into_iter::<serde_json::Value>()
        .next()
        .ok_or_else(|| Error::malformed(source_name, "document is empty"))?
        .map_err(|e| {
            if e.is_io() {
                Error::unreadable(source_name, e.into())
            } else {
                Error::malformed(source_name, e.to_string())
            }
        })?;

    let ConfigValue::Object(mut document) = ConfigValue::from(decoded) else {
        return Err(Error::malformed(
            source_name,
            "expected a JSON object at the top level",
        ));
    };
    tracing::debug!(source = source_name, keys = document.len(), "Loaded JSON document");

    let Some(node) = root_node.filter(|node| !node.is_empty()) else {
        return Ok(document);
    };

    match document.remove(node) {
        Some(ConfigValue::Object(scoped)) => {
            tracing::debug!(source = source_name, node, keys = scoped.len(), "Selected root node");
            Ok(scoped)
        }
        _ => Err(Error::RootNodeMissing {
            node: node.to_string(),
            source_name: source_name.to_string(),
        }),
    }
}

/// Open `path` through `opener` and load it.
pub fn load_file(
    opener: &dyn DocumentOpener,
    path: &str,
    root_node: Option<&str>,
) -> Result<ConfigMap> {
    tracing::debug!(file = path, node = ?root_node, "Reading configuration file");
    let reader = opener
        .open(Path::new(path))
        .map_err(|e| Error::unreadable(path, e))?;
    load(reader, path, root_node)
}
