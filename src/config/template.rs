//! Base template loading

use serde_yaml::{Mapping, Value};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// File name of the base template all per-language configs start from.
pub const TEMPLATE_FILE_NAME: &str = "rec_multi_language_lite_train.yml";

/// The loaded base configuration together with its provenance.
#[derive(Debug, Clone)]
pub struct Template {
    /// Where the template was read from
    pub path: PathBuf,

    /// SHA-256 digest of the raw template bytes
    pub digest: String,

    /// Parsed top-level mapping, in document order
    pub config: Mapping,
}

impl Template {
    /// Load and parse the template at `path`.
    ///
    /// Absence of the file is reported as [`ConfigError::MissingTemplate`]
    /// before any read is attempted.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::MissingTemplate {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let digest = hex::encode(Sha256::digest(&bytes));

        let value: Value = serde_yaml::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            context: path.display().to_string(),
            source,
        })?;

        match value {
            Value::Mapping(config) => Ok(Self {
                path: path.to_path_buf(),
                digest,
                config,
            }),
            _ => Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }
}
