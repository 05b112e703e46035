//! Layered application configuration
//!
//! Declare the parameters an application understands once, and collect
//! their values from several sources, each overriding the previous one when
//! it provides a value:
//!
//! 1. **Code default** - [`ParamSpec::default_value`]
//! 2. **JSON document** - a file named by a [`ParamKind::DocumentPath`]
//!    parameter, then standard input when a [`ParamKind::DocumentFromStdin`]
//!    flag is set; an optional [`ParamKind::RootNode`] selects a nested object
//! 3. **Environment** - a variable named exactly like the parameter
//! 4. **Command line** - `-name=value`, or a bare `-name` meaning `true`
//!
//! Values from the environment and command line are strings; int and bool
//! parameters are converted after merging. Required parameters and
//! per-parameter validators are checked last.
//!
//! # Example
//!
//! ```no_run
//! use appconfig::{Catalog, ParamSpec};
//!
//! let catalog = Catalog::new()
//!     .with(ParamSpec::document_path("config").default_value("polyverse.json"))
//!     .with(ParamSpec::root_node("config-node").default_value("crypto-proxy"))
//!     .with(ParamSpec::bool("debug").default_value(false).prefix("--"))
//!     .with(ParamSpec::string("proxy-addr").default_value(":8080").required())
//!     .with(ParamSpec::usage_flag("help").usage("Prints usage.").prefix("--"));
//!
//! let config = catalog.resolve()?;
//! if config.usage_requested().is_some() {
//!     config.print_usage("Usage: app [options]\n\noptions:\n")?;
//!     return Ok(());
//! }
//! println!("listening on {}", config.get_string("proxy-addr"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod param;
pub mod resolved;
pub mod resolver;
pub mod sources;
pub mod usage;
pub mod value;

pub use error::{Error, Result};
pub use param::{Catalog, DEFAULT_PREFIX, ParamKind, ParamSpec, Validator};
pub use resolved::ResolvedConfig;
pub use resolver::{Resolver, parse_bool, parse_int};
pub use sources::{DocumentOpener, Environment, FsOpener, Inputs, ProcessEnv, RawSourceMap};
pub use value::{ConfigMap, ConfigValue};
