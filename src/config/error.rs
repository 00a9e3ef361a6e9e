//! Configuration errors

use std::io;
use std::path::PathBuf;

/// Errors raised while loading the template or merging into it.
///
/// Every variant names the offending key, path or file so the invocation
/// can be corrected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("base template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("template {} must be a mapping at the top level", path.display())]
    NotAMapping { path: PathBuf },

    #[error("malformed override '{raw}': {reason}")]
    MalformedOverride { raw: String, reason: String },

    #[error("unknown root key '{root}' in override '{key}'; top-level keys are: {available}")]
    UnknownRootKey {
        key: String,
        root: String,
        available: String,
    },

    #[error("invalid path '{key}': '{segment}' {reason}")]
    InvalidPath {
        key: String,
        segment: String,
        reason: &'static str,
    },

    #[error("missing {what}: {} does not exist", path.display())]
    MissingResource { what: String, path: PathBuf },
}
