//! The final, immutable configuration and its typed accessors

use crate::param::{Catalog, ParamKind};
use crate::value::{ConfigMap, ConfigValue};
use std::collections::{BTreeMap, HashMap};
use std::io;

/// Result of one resolution pass
///
/// Owns the resolved values and borrows the catalog they were declared in,
/// which the prefix and usage helpers need. Nothing is mutated after
/// construction, so a `ResolvedConfig` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ResolvedConfig<'c> {
    catalog: &'c Catalog,
    values: HashMap<String, ConfigValue>,
    usage_flag: Option<&'c str>,
}

impl<'c> ResolvedConfig<'c> {
    pub(crate) fn new(catalog: &'c Catalog, values: HashMap<String, ConfigValue>) -> Self {
        Self {
            catalog,
            values,
            usage_flag: None,
        }
    }

    /// A configuration holding nothing but the usage flag, set to true.
    pub(crate) fn usage_only(catalog: &'c Catalog, flag: &'c str) -> Self {
        Self {
            catalog,
            values: HashMap::from([(flag.to_string(), ConfigValue::Bool(true))]),
            usage_flag: Some(flag),
        }
    }

    /// Name of the usage flag that cut resolution short, if any.
    ///
    /// When this is `Some`, no other parameter has a value.
    pub fn usage_requested(&self) -> Option<&'c str> {
        self.usage_flag
    }

    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    /// The integer value, or `0` if the parameter is unknown or not an int.
    pub fn get_int(&self, name: &str) -> i64 {
        self.get(name).and_then(ConfigValue::as_i64).unwrap_or_default()
    }

    /// The boolean value, or `false` if the parameter is unknown or not a bool.
    pub fn get_bool(&self, name: &str) -> bool {
        self.get(name).and_then(ConfigValue::as_bool).unwrap_or_default()
    }

    /// The string value, or `""` if the parameter is unknown or not a string.
    pub fn get_string(&self, name: &str) -> &str {
        self.get(name).and_then(ConfigValue::as_str).unwrap_or_default()
    }

    /// The float value, or `0.0`. Floats only come from documents.
    pub fn get_float(&self, name: &str) -> f64 {
        self.get(name).and_then(ConfigValue::as_f64).unwrap_or_default()
    }

    pub fn get_object(&self, name: &str) -> Option<&ConfigMap> {
        self.get(name).and_then(ConfigValue::as_object)
    }

    /// All resolved values keyed by parameter name.
    pub fn values(&self) -> &HashMap<String, ConfigValue> {
        &self.values
    }

    /// The resolved values as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn keys_by_kind(&self, kind: ParamKind) -> Vec<&'c str> {
        self.catalog.keys_by_kind(kind)
    }

    pub fn key_with_prefix(&self, name: &str) -> Option<String> {
        self.catalog.key_with_prefix(name)
    }

    pub fn all_keys_with_prefix(&self) -> BTreeMap<String, String> {
        self.catalog.keys_with_prefix()
    }

    pub fn render_usage(&self, header: &str) -> String {
        self.catalog.render_usage(header)
    }

    pub fn write_usage(&self, out: &mut impl io::Write, header: &str) -> io::Result<()> {
        crate::usage::write(self.catalog, out, header)
    }

    pub fn print_usage(&self, header: &str) -> io::Result<()> {
        self.catalog.print_usage(header)
    }
}
