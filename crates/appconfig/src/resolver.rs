//! Parameter resolution with layered precedence
//!
//! Sources are applied lowest to highest, each overriding the previous one
//! when it provides a value:
//!
//! 1. Catalog default
//! 2. JSON document file
//! 3. JSON document from standard input
//! 4. Environment variable
//! 5. Command-line switch
//!
//! A few parameters steer the pass itself and are looked up early, from the
//! command line, environment and default only: the document path, the root
//! node, the stdin document flag, the read-env flag and the usage flag.

use crate::param::{Catalog, ParamKind, ParamSpec};
use crate::resolved::ResolvedConfig;
use crate::sources::document::{self, STDIN_SOURCE};
use crate::sources::{Inputs, RawSourceMap, cli, env};
use crate::value::{ConfigMap, ConfigValue};
use crate::{Error, Result};
use std::collections::HashMap;
use std::io;

/// Parse a permissive boolean: `1`, `t`, `true` / `0`, `f`, `false`, any case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    if raw == "1" || raw.eq_ignore_ascii_case("t") || raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw == "0" || raw.eq_ignore_ascii_case("f") || raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parse a base-10 integer with an optional sign.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Raw values gathered from every source, before per-parameter merging
struct Layers {
    file: ConfigMap,
    stdin: ConfigMap,
    env: RawSourceMap,
    cli: RawSourceMap,
}

/// Runs one resolution pass over a borrowed catalog
///
/// ```
/// use appconfig::{Catalog, Inputs, ParamSpec, Resolver};
///
/// let catalog = Catalog::new().with(ParamSpec::int("timeout").default_value(1000));
/// let config = Resolver::new(&catalog)
///     .resolve(Inputs::new(["-timeout=5000"]))
///     .unwrap();
/// assert_eq!(config.get_int("timeout"), 5000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c Catalog,
    strict: bool,
}

impl<'c> Resolver<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            strict: false,
        }
    }

    /// Turn unparsable int and bool strings into [`Error::CoercionFailed`]
    /// instead of the kind's zero value.
    pub fn strict_coercion(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Collect, merge, coerce and validate every declared parameter.
    ///
    /// Returns early with only the usage flag set when the command line or
    /// environment asks for usage; no document is read in that case.
    pub fn resolve(&self, inputs: Inputs<'_>) -> Result<ResolvedConfig<'c>> {
        let Inputs {
            args,
            env: environment,
            opener,
            stdin,
        } = inputs;

        let cli = cli::match_args(self.catalog, &args)?;

        let env = if self.reads_env(&cli)? {
            env::collect(self.catalog, environment.as_ref())
        } else {
            tracing::debug!("Environment lookup disabled by read-env flag");
            RawSourceMap::new()
        };

        if let Some(flag) = self.usage_requested(&cli, &env)? {
            tracing::debug!(flag, "Usage flag set; skipping resolution");
            return Ok(ResolvedConfig::usage_only(self.catalog, flag));
        }

        let root_node = self.early_string(ParamKind::RootNode, &cli, &env);
        let root_node = root_node.as_deref();

        let file = match self.early_string(ParamKind::DocumentPath, &cli, &env) {
            Some(path) if !path.is_empty() => {
                document::load_file(opener.as_ref(), &path, root_node)?
            }
            _ => {
                tracing::debug!("No configuration file specified");
                ConfigMap::new()
            }
        };

        let stdin = if self.early_flag(ParamKind::DocumentFromStdin, &cli, &env)? {
            tracing::debug!(node = ?root_node, "Reading configuration from standard input");
            let reader = stdin.ok_or_else(|| {
                Error::unreadable(
                    STDIN_SOURCE,
                    io::Error::new(io::ErrorKind::NotFound, "no standard input attached"),
                )
            })?;
            document::load(reader, STDIN_SOURCE, root_node)?
        } else {
            ConfigMap::new()
        };

        let layers = Layers {
            file,
            stdin,
            env,
            cli,
        };

        tracing::debug!("Finalizing configuration values");
        let mut values = HashMap::with_capacity(self.catalog.len());
        for spec in self.catalog {
            let value = self.resolve_param(spec, &layers)?;
            values.insert(spec.name().to_string(), value);
        }
        tracing::debug!(?values, "Final configuration values");

        Ok(ResolvedConfig::new(self.catalog, values))
    }

    fn resolve_param(&self, spec: &ParamSpec, layers: &Layers) -> Result<ConfigValue> {
        let name = spec.name();
        let mut value = spec.default().cloned();
        if value.is_some() {
            tracing::debug!(param = name, "Using default");
        }

        for (layer, doc) in [("file", &layers.file), ("stdin", &layers.stdin)] {
            if let Some(found) = doc.get(name).filter(|v| !v.is_null()) {
                tracing::debug!(param = name, layer, value = %found, "Document override");
                value = Some(found.clone());
            }
        }

        for (layer, raw) in [("env", &layers.env), ("cli", &layers.cli)] {
            if let Some(found) = raw.get(name) {
                tracing::debug!(param = name, layer, value = %found, "String override");
                value = Some(ConfigValue::String(found.clone()));
            }
        }

        let value = match value {
            Some(value) => self.coerce(spec, value)?,
            None if spec.is_required() => {
                return Err(Error::MissingRequiredParameter {
                    name: name.to_string(),
                });
            }
            None => spec.kind().zero_value(),
        };

        if let Some(validator) = spec.validator() {
            if !validator(&value) {
                return Err(Error::ValidationFailed {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(value)
    }

    /// Convert string values of int and boolean kinds; everything else is
    /// kept as the source typed it.
    fn coerce(&self, spec: &ParamSpec, value: ConfigValue) -> Result<ConfigValue> {
        let kind = spec.kind();
        if kind != ParamKind::Int && !kind.is_boolean() {
            return Ok(value);
        }
        let ConfigValue::String(raw) = &value else {
            return Ok(value);
        };

        let coerced = if kind == ParamKind::Int {
            parse_int(raw).map(ConfigValue::Int)
        } else {
            parse_bool(raw).map(ConfigValue::Bool)
        };

        match coerced {
            Some(converted) => {
                tracing::debug!(param = spec.name(), %kind, %raw, "Converted string value");
                Ok(converted)
            }
            None => self.coercion_failed(spec, raw).map(|()| kind.zero_value()),
        }
    }

    fn coercion_failed(&self, spec: &ParamSpec, raw: &str) -> Result<()> {
        if self.strict {
            return Err(Error::CoercionFailed {
                name: spec.name().to_string(),
                kind: spec.kind(),
                value: raw.to_string(),
            });
        }
        tracing::warn!(
            param = spec.name(),
            kind = %spec.kind(),
            value = raw,
            "Unparsable value; using zero value"
        );
        Ok(())
    }

    /// Parse a steering flag leniently, or strictly when configured.
    fn flag_value(&self, spec: &ParamSpec, raw: &str) -> Result<bool> {
        match parse_bool(raw) {
            Some(flag) => Ok(flag),
            None => self.coercion_failed(spec, raw).map(|()| false),
        }
    }

    fn default_flag(&self, spec: &ParamSpec) -> Result<bool> {
        match spec.default() {
            Some(ConfigValue::Bool(flag)) => Ok(*flag),
            Some(ConfigValue::String(raw)) => self.flag_value(spec, raw),
            _ => Ok(false),
        }
    }

    /// Environment lookup runs unless a read-env flag resolves false from
    /// the command line or its default.
    fn reads_env(&self, cli: &RawSourceMap) -> Result<bool> {
        let Some(spec) = self.catalog.first_of_kind(ParamKind::ReadEnvFlag) else {
            return Ok(true);
        };
        match cli.get(spec.name()) {
            Some(raw) => self.flag_value(spec, raw),
            None => self.default_flag(spec),
        }
    }

    fn usage_requested(&self, cli: &RawSourceMap, env: &RawSourceMap) -> Result<Option<&'c str>> {
        let Some(spec) = self.catalog.first_of_kind(ParamKind::UsageFlag) else {
            return Ok(None);
        };
        let Some(raw) = cli.get(spec.name()).or_else(|| env.get(spec.name())) else {
            return Ok(None);
        };
        Ok(self.flag_value(spec, raw)?.then_some(spec.name()))
    }

    fn early_flag(&self, kind: ParamKind, cli: &RawSourceMap, env: &RawSourceMap) -> Result<bool> {
        let Some(spec) = self.catalog.first_of_kind(kind) else {
            return Ok(false);
        };
        match cli.get(spec.name()).or_else(|| env.get(spec.name())) {
            Some(raw) => self.flag_value(spec, raw),
            None => self.default_flag(spec),
        }
    }

    fn early_string(
        &self,
        kind: ParamKind,
        cli: &RawSourceMap,
        env: &RawSourceMap,
    ) -> Option<String> {
        let spec = self.catalog.first_of_kind(kind)?;
        cli.get(spec.name())
            .or_else(|| env.get(spec.name()))
            .cloned()
            .or_else(|| spec.default().and_then(ConfigValue::as_str).map(str::to_string))
    }
}
