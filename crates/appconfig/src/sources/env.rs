//! Environment variable matching

use super::{Environment, RawSourceMap};
use crate::param::{Catalog, ParamKind};

/// Look up one variable per parameter, named exactly like the parameter.
///
/// Empty values count as unset. The read-env flag is never looked up: it
/// decides whether this lookup happens at all.
pub fn collect(catalog: &Catalog, env: &dyn Environment) -> RawSourceMap {
    tracing::debug!("Checking environment variables");

    let values: RawSourceMap = catalog
        .iter()
        .filter(|spec| spec.kind() != ParamKind::ReadEnvFlag)
        .filter_map(|spec| {
            let value = env.var(spec.name()).filter(|v| !v.is_empty())?;
            tracing::debug!(param = spec.name(), %value, "Environment match");
            Some((spec.name().to_string(), value))
        })
        .collect();

    tracing::debug!(?values, "Environment variables processed");
    values
}
