//! Parameter declarations
//!
//! A [`Catalog`] lists every parameter an application recognizes. It is built
//! once by the caller and is read-only afterwards; resolution and every
//! accessor borrow it.

use crate::resolved::ResolvedConfig;
use crate::resolver::Resolver;
use crate::sources::Inputs;
use crate::value::ConfigValue;
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Switch prefix used when a parameter does not override it
pub const DEFAULT_PREFIX: &str = "-";

/// Predicate run against a fully resolved value
pub type Validator = Arc<dyn Fn(&ConfigValue) -> bool + Send + Sync>;

/// Declared kind of a parameter
///
/// The kind drives string coercion, the zero value used when nothing is
/// found, and the special roles some parameters play during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    #[default]
    String,
    Int,
    Bool,
    /// Arbitrary document value; no coercion
    Object,
    /// Path of the JSON document to load
    DocumentPath,
    /// Key selecting a nested object of the document as the effective scope
    RootNode,
    /// Gates environment lookup
    ReadEnvFlag,
    /// Short-circuits resolution when true
    UsageFlag,
    /// Gates loading a JSON document from standard input
    DocumentFromStdin,
}

impl ParamKind {
    /// Value assigned when no source provided one.
    pub fn zero_value(self) -> ConfigValue {
        match self {
            Self::String | Self::DocumentPath | Self::RootNode => ConfigValue::String(String::new()),
            Self::Int => ConfigValue::Int(0),
            Self::Bool | Self::ReadEnvFlag | Self::UsageFlag | Self::DocumentFromStdin => {
                ConfigValue::Bool(false)
            }
            Self::Object => ConfigValue::Null,
        }
    }

    /// Kinds whose resolved value is a boolean.
    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::ReadEnvFlag | Self::UsageFlag | Self::DocumentFromStdin
        )
    }

    /// Kinds that steer resolution itself. Only the first of each is honored.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Self::DocumentPath
                | Self::RootNode
                | Self::ReadEnvFlag
                | Self::UsageFlag
                | Self::DocumentFromStdin
        )
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::DocumentPath => "document path",
            Self::RootNode => "root node",
            Self::ReadEnvFlag => "read-env flag",
            Self::UsageFlag => "usage flag",
            Self::DocumentFromStdin => "stdin document flag",
        };
        f.write_str(name)
    }
}

/// Declaration of one recognized configuration key
///
/// The name is the lookup key in every source: the command-line switch
/// (after its prefix), the environment variable and the document key.
///
/// ```
/// use appconfig::ParamSpec;
///
/// let debug = ParamSpec::bool("debug")
///     .default_value(false)
///     .usage("Debug mode.")
///     .prefix("--");
/// assert_eq!(debug.switch(), "--debug");
/// ```
#[derive(Clone, Serialize)]
pub struct ParamSpec {
    name: String,
    kind: ParamKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<ConfigValue>,
    #[serde(skip_serializing_if = "String::is_empty")]
    usage: String,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix_override: Option<String>,
    #[serde(skip)]
    validator: Option<Validator>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            usage: String::new(),
            required: false,
            prefix_override: None,
            validator: None,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::String)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Int)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Bool)
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Object)
    }

    pub fn document_path(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::DocumentPath)
    }

    pub fn root_node(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::RootNode)
    }

    pub fn read_env_flag(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::ReadEnvFlag)
    }

    pub fn usage_flag(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::UsageFlag)
    }

    pub fn document_from_stdin(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::DocumentFromStdin)
    }

    /// Set the code-level default, the lowest-precedence source.
    pub fn default_value(mut self, value: impl Into<ConfigValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Fail resolution when no source provides a value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Override the command-line prefix. An empty prefix falls back to `-`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix_override = (!prefix.is_empty()).then_some(prefix);
        self
    }

    /// Attach a predicate the final value must satisfy.
    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: Fn(&ConfigValue) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn default(&self) -> Option<&ConfigValue> {
        self.default.as_ref()
    }

    pub fn usage_text(&self) -> &str {
        &self.usage
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn validator(&self) -> Option<&(dyn Fn(&ConfigValue) -> bool + Send + Sync)> {
        self.validator.as_deref()
    }

    /// Effective command-line prefix.
    pub fn switch_prefix(&self) -> &str {
        self.prefix_override.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Command-line spelling: prefix followed by the name.
    pub fn switch(&self) -> String {
        format!("{}{}", self.switch_prefix(), self.name)
    }
}

impl fmt::Debug for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("usage", &self.usage)
            .field("required", &self.required)
            .field("prefix_override", &self.prefix_override)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The full set of recognized parameters, in declaration order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    params: Vec<ParamSpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Catalog::insert`].
    pub fn with(mut self, spec: ParamSpec) -> Self {
        self.insert(spec);
        self
    }

    /// Add a parameter. A parameter whose name is already declared replaces the
    /// earlier one in place.
    pub fn insert(&mut self, spec: ParamSpec) {
        match self.params.iter_mut().find(|p| p.name == spec.name) {
            Some(existing) => {
                tracing::debug!(param = %spec.name, "Replacing existing parameter declaration");
                *existing = spec;
            }
            None => self.params.push(spec),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Names of every parameter declared with `kind`.
    pub fn keys_by_kind(&self, kind: ParamKind) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.kind == kind)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// The parameter playing a special role. Later duplicates are ignored.
    pub(crate) fn first_of_kind(&self, kind: ParamKind) -> Option<&ParamSpec> {
        debug_assert!(kind.is_special());
        let mut matching = self.params.iter().filter(|p| p.kind == kind);
        let first = matching.next()?;
        let ignored: Vec<&str> = matching.map(|p| p.name.as_str()).collect();
        if !ignored.is_empty() {
            tracing::warn!(
                %kind,
                honored = %first.name,
                ?ignored,
                "Several parameters share a special kind; only the first is honored"
            );
        }
        Some(first)
    }

    /// Command-line spelling of one parameter.
    pub fn key_with_prefix(&self, name: &str) -> Option<String> {
        self.get(name).map(ParamSpec::switch)
    }

    /// Command-line spelling of every parameter, keyed by name.
    pub fn keys_with_prefix(&self) -> BTreeMap<String, String> {
        self.params
            .iter()
            .map(|p| (p.name.clone(), p.switch()))
            .collect()
    }

    /// Resolve against the real process: its arguments, environment,
    /// filesystem and standard input.
    pub fn resolve(&self) -> Result<ResolvedConfig<'_>> {
        Resolver::new(self).resolve(Inputs::from_process())
    }
}

impl FromIterator<ParamSpec> for Catalog {
    fn from_iter<I: IntoIterator<Item = ParamSpec>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for spec in iter {
            catalog.insert(spec);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ParamSpec;
    type IntoIter = std::slice::Iter<'a, ParamSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new()
            .with(ParamSpec::document_path("config").default_value("polyverse.json"))
            .with(ParamSpec::bool("debug").prefix("--"))
            .with(ParamSpec::int("buffer_size").default_value(1024))
            .with(ParamSpec::string("proxy-addr"))
    }

    #[test]
    fn switch_uses_default_prefix_unless_overridden() {
        let catalog = catalog();
        assert_eq!(catalog.key_with_prefix("debug").as_deref(), Some("--debug"));
        assert_eq!(
            catalog.key_with_prefix("proxy-addr").as_deref(),
            Some("-proxy-addr")
        );
        assert_eq!(catalog.key_with_prefix("nope"), None);
    }

    #[test]
    fn empty_prefix_override_falls_back_to_dash() {
        let spec = ParamSpec::string("name").prefix("");
        assert_eq!(spec.switch_prefix(), DEFAULT_PREFIX);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut catalog = catalog();
        catalog.insert(ParamSpec::int("debug"));

        assert_eq!(catalog.len(), 4);
        let names: Vec<&str> = catalog.iter().map(ParamSpec::name).collect();
        assert_eq!(names, ["config", "debug", "buffer_size", "proxy-addr"]);
        assert_eq!(catalog.get("debug").unwrap().kind(), ParamKind::Int);
    }

    #[test]
    fn keys_by_kind_filters_on_declared_kind() {
        let catalog = catalog().with(ParamSpec::int("workers"));
        assert_eq!(catalog.keys_by_kind(ParamKind::Int), ["buffer_size", "workers"]);
        assert!(catalog.keys_by_kind(ParamKind::UsageFlag).is_empty());
    }

    #[test]
    fn first_of_kind_honors_declaration_order() {
        let catalog = Catalog::new()
            .with(ParamSpec::root_node("node-a"))
            .with(ParamSpec::root_node("node-b"));
        assert_eq!(
            catalog.first_of_kind(ParamKind::RootNode).map(ParamSpec::name),
            Some("node-a")
        );
    }

    #[test]
    fn zero_values_follow_kind() {
        assert_eq!(ParamKind::String.zero_value(), ConfigValue::from(""));
        assert_eq!(ParamKind::RootNode.zero_value(), ConfigValue::from(""));
        assert_eq!(ParamKind::Int.zero_value(), ConfigValue::Int(0));
        assert_eq!(ParamKind::UsageFlag.zero_value(), ConfigValue::Bool(false));
        assert_eq!(
            ParamKind::DocumentFromStdin.zero_value(),
            ConfigValue::Bool(false)
        );
        assert_eq!(ParamKind::Object.zero_value(), ConfigValue::Null);
    }

    #[test]
    fn serializes_without_validator() {
        let catalog = Catalog::new().with(
            ParamSpec::int("port")
                .default_value(8080)
                .validate(|v| v.as_i64().is_some_and(|p| p > 0)),
        );
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "name": "port",
                "kind": "int",
                "default": 8080,
                "required": false
            }])
        );
    }
}
