//! Error types for appconfig

use crate::param::ParamKind;

/// Result type for appconfig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a resolution pass
///
/// Every variant is terminal: nothing is retried and no partially resolved
/// configuration is handed back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A command-line token matched no declared parameter
    #[error("'{token}' is not a supported flag")]
    UnrecognizedSwitch { token: String },

    /// The configuration document could not be opened or read
    #[error("Cannot read configuration document '{source_name}': {source}")]
    DocumentUnreadable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not a single JSON object
    #[error("Failed to parse JSON configuration document '{source_name}': {message}")]
    DocumentMalformed {
        source_name: String,
        message: String,
    },

    /// The selected root node is absent or not an object
    #[error("Node '{node}' not found in JSON document '{source_name}'")]
    RootNodeMissing { node: String, source_name: String },

    /// A required parameter received no value from any source
    #[error("Missing required parameter '{name}'")]
    MissingRequiredParameter { name: String },

    /// A parameter's validator rejected the resolved value
    #[error("Validation failed for parameter '{name}': rejected value {value}")]
    ValidationFailed { name: String, value: String },

    /// A string could not be converted to the declared kind (strict mode)
    #[error("Cannot convert '{value}' to {kind} for parameter '{name}'")]
    CoercionFailed {
        name: String,
        kind: ParamKind,
        value: String,
    },
}

impl Error {
    pub(crate) fn unreadable(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::DocumentUnreadable {
            source_name: source_name.into(),
            source,
        }
    }

    pub(crate) fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DocumentMalformed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Name of the parameter or token this error is about, when there is one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedSwitch { token } => Some(token),
            Self::MissingRequiredParameter { name }
            | Self::ValidationFailed { name, .. }
            | Self::CoercionFailed { name, .. } => Some(name),
            Self::RootNodeMissing { node, .. } => Some(node),
            Self::DocumentUnreadable { .. } | Self::DocumentMalformed { .. } => None,
        }
    }
}
