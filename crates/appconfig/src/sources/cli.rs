//! Command-line matching
//!
//! Switches take the form `<prefix><name>` or `<prefix><name>=<value>`. The
//! prefix is `-` unless the parameter overrides it. A bare switch records the
//! literal value `"true"`, so boolean flags need no value.

use super::RawSourceMap;
use crate::param::{Catalog, ParamSpec};
use crate::{Error, Result};

/// Match every argument against the catalog.
///
/// Arguments must not include the program name. An argument that names no
/// declared parameter aborts the whole match. When a parameter is given more
/// than once the last occurrence wins.
pub fn match_args(catalog: &Catalog, args: &[String]) -> Result<RawSourceMap> {
    tracing::debug!(?args, "Processing command-line arguments");

    let mut values = RawSourceMap::new();
    for arg in args {
        let (switch, value) = match arg.split_once('=') {
            Some((switch, value)) => (switch, value),
            None => (arg.as_str(), "true"),
        };

        let Some(spec) = catalog.iter().find(|spec| names_param(spec, switch)) else {
            tracing::debug!(%arg, "No matching parameter");
            return Err(Error::UnrecognizedSwitch { token: arg.clone() });
        };

        tracing::debug!(param = spec.name(), value, "Command-line match");
        values.insert(spec.name().to_string(), value.to_string());
    }

    tracing::debug!(?values, "Command-line arguments processed");
    Ok(values)
}

fn names_param(spec: &ParamSpec, switch: &str) -> bool {
    switch
        .strip_prefix(spec.switch_prefix())
        .is_some_and(|name| name == spec.name())
}
