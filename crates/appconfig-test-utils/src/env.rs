//! In-memory environments.

use std::collections::HashMap;

/// Build an environment from `(name, value)` pairs.
///
/// ```rust
/// use appconfig::Environment;
///
/// let env = appconfig_test_utils::env(&[("timeout", "5000")]);
/// assert_eq!(env.var("timeout").as_deref(), Some("5000"));
/// ```
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
