//! Generator settings
//!
//! Where the template is read from, which directory is the project root and
//! where the generated config lands. Resolved from three layers:
//! 1. Built-in defaults (template and output in the working directory,
//!    project root three levels above it)
//! 2. Optional settings file (`--settings rec-lang-config.toml`)
//! 3. CLI flags

mod layers;

pub use layers::{merge_layers, overlay};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TEMPLATE_FILE_NAME;

/// Number of directory levels between the working directory and the project root.
pub const PROJECT_ROOT_DEPTH: usize = 3;

/// Resolved generator settings. All paths are absolute after [`GeneratorSettings::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Base template file
    pub template: PathBuf,

    /// Root that dictionary, label-list and dataset paths are relative to
    pub project_root: PathBuf,

    /// Directory the generated config is written to
    pub output_dir: PathBuf,
}

/// Settings supplied on the command line; `None` leaves lower layers in place.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub template: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl SettingsOverrides {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        let fields = [
            ("template", &self.template),
            ("project_root", &self.project_root),
            ("output_dir", &self.output_dir),
        ];
        for (key, path) in fields {
            if let Some(path) = path {
                map.insert(key.to_string(), Value::String(path.to_string_lossy().into_owned()));
            }
        }
        Value::Object(map)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl GeneratorSettings {
    /// Built-in defaults for a given working directory.
    pub fn defaults(work_dir: &Path) -> Self {
        Self {
            template: work_dir.join(TEMPLATE_FILE_NAME),
            project_root: project_root_of(work_dir),
            output_dir: work_dir.to_path_buf(),
        }
    }

    /// Merge defaults, the optional settings file and CLI overrides.
    ///
    /// Relative paths from the file or the CLI are resolved against `work_dir`.
    pub fn build(
        work_dir: &Path,
        settings_file: Option<&Path>,
        cli: &SettingsOverrides,
    ) -> Result<Self, SettingsError> {
        let mut layers = vec![serde_json::to_value(Self::defaults(work_dir))?];

        if let Some(path) = settings_file {
            layers.push(load_settings_file(path)?);
        }
        layers.push(cli.to_value());

        let mut settings: Self = serde_json::from_value(merge_layers(layers))?;
        settings.template = absolutize(work_dir, settings.template);
        settings.project_root = absolutize(work_dir, settings.project_root);
        settings.output_dir = absolutize(work_dir, settings.output_dir);
        Ok(settings)
    }
}

/// The directory [`PROJECT_ROOT_DEPTH`] levels above `work_dir`, clamped at
/// the filesystem root.
pub fn project_root_of(work_dir: &Path) -> PathBuf {
    let mut ancestors = work_dir.ancestors();
    let mut root = work_dir;
    for _ in 0..=PROJECT_ROOT_DEPTH {
        match ancestors.next() {
            Some(dir) if !dir.as_os_str().is_empty() => root = dir,
            _ => break,
        }
    }
    root.to_path_buf()
}

fn load_settings_file(path: &Path) -> Result<Value, SettingsError> {
    if !path.is_file() {
        return Err(SettingsError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn absolutize(work_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        work_dir.join(path)
    }
}
