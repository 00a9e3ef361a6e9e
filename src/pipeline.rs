//! Generation pipeline
//!
//! Runs one generation end to end:
//! - Load the base template
//! - Parse caller overrides
//! - Classify the language and check its dictionary exists
//! - Write family paths, apply overrides, apply shortcuts
//! - Replace the output file with the serialized result
//!
//! Every validation happens in memory before the output directory is
//! touched, so a failed run leaves any previous output file in place.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use rec_lang::{classify, Classification, LanguageError};

use crate::config::{apply_family, apply_overrides, ConfigError, OverrideSpec, Shortcuts, Template};
use crate::settings::GeneratorSettings;
use crate::summary::{RunContext, RunSummary};

/// Pipeline errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

impl GenerateError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::Language(_) => 10,
            GenerateError::Config(ConfigError::MissingTemplate { .. }) => 11,
            GenerateError::Config(ConfigError::MissingResource { .. }) => 12,
            GenerateError::Config(ConfigError::MalformedOverride { .. })
            | GenerateError::Config(ConfigError::UnknownRootKey { .. })
            | GenerateError::Config(ConfigError::InvalidPath { .. }) => 13,
            GenerateError::Config(_) => 14,
            GenerateError::Io { .. } | GenerateError::Serialize(_) => 1,
        }
    }
}

/// Result type for pipeline operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// How the output file name is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputNaming {
    /// `rec_{family}_lite_train.yml`, using the resolved family name
    #[default]
    Family,
    /// `rec_{token}_lite_train.yml`, using the token exactly as requested
    Token,
}

/// One generation request, as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Requested language token
    pub language: String,

    /// Raw `key=value` overrides
    pub overrides: Vec<String>,

    pub shortcuts: Shortcuts,

    pub naming: OutputNaming,
}

/// Final in-memory configuration, validated but not yet written.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub classification: Classification,
    pub template_digest: String,
    pub overrides: OverrideSpec,
    pub config: Mapping,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub output_path: PathBuf,
    pub config: Mapping,
    pub summary: RunSummary,
    /// Whether an earlier file at `output_path` was removed first
    pub replaced_existing: bool,
}

/// Output file name for a classified language.
pub fn output_file_name(classification: &Classification, naming: OutputNaming) -> String {
    let name = match naming {
        OutputNaming::Family => classification.resolved.name(),
        OutputNaming::Token => classification.token.as_str(),
    };
    format!("rec_{}_lite_train.yml", name)
}

/// Generates per-language configs for one set of settings.
#[derive(Debug, Clone)]
pub struct Generator {
    settings: GeneratorSettings,
}

impl Generator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Build and validate the final config without touching the output directory.
    pub fn merge(&self, request: &GenerateRequest) -> GenerateResult<MergedConfig> {
        let template = Template::load(&self.settings.template)?;
        debug!(template = %template.path.display(), digest = %template.digest, "loaded template");

        let overrides = OverrideSpec::parse(&request.overrides)?;

        let classification = classify(&request.language)?;
        debug!(
            language = %classification.token,
            resolved = classification.resolved.name(),
            "classified language"
        );

        let dict_path = self
            .settings
            .project_root
            .join(&classification.paths.character_dict_path);
        if !dict_path.is_file() {
            return Err(ConfigError::MissingResource {
                what: format!("dictionary file {}", classification.paths.dict_file_name()),
                path: dict_path,
            }
            .into());
        }

        let mut config = template.config;
        apply_family(&mut config, &classification.paths)?;
        apply_overrides(&mut config, &overrides)?;
        debug!(count = overrides.len(), "applied overrides");

        request.shortcuts.apply(&mut config, &self.settings.project_root)?;

        Ok(MergedConfig {
            classification,
            template_digest: template.digest,
            overrides,
            config,
        })
    }

    /// Merge, then replace the output file with the result.
    pub fn generate(&self, request: &GenerateRequest) -> GenerateResult<Generated> {
        let merged = self.merge(request)?;

        let file_name = output_file_name(&merged.classification, request.naming);
        let output_path = self.settings.output_dir.join(file_name);
        let replaced_existing = write_config(&output_path, &merged.config)?;

        let summary = RunSummary::from_config(
            &merged.config,
            RunContext {
                project_path: &self.settings.project_root,
                language: &merged.classification.token,
                resolved: merged.classification.resolved.name(),
                output_file: &output_path,
                template_digest: &merged.template_digest,
                applied_overrides: merged.overrides.keys(),
            },
        );

        Ok(Generated {
            output_path,
            config: merged.config,
            summary,
            replaced_existing,
        })
    }
}

/// Delete any existing file at `path`, then write `config` as block-style YAML.
///
/// Returns whether a previous file was removed.
pub fn write_config(path: &Path, config: &Mapping) -> GenerateResult<bool> {
    let yaml = serde_yaml::to_string(config)?;

    let replaced = path.is_file();
    if replaced {
        warn!(path = %path.display(), "replacing existing config");
        fs::remove_file(path).map_err(|source| GenerateError::Io {
            action: "remove",
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, yaml).map_err(|source| GenerateError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote config");
    Ok(replaced)
}
