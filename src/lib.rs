//! Per-language training config generator for text-recognition models
//!
//! Starts from the multi-language base template, rewrites its dictionary,
//! model and label-list paths for the requested language's script family,
//! applies `key=value` overrides (including dotted paths into nested
//! sections) and writes `rec_{name}_lite_train.yml`.

pub mod config;
pub mod pipeline;
pub mod settings;
pub mod summary;

pub use config::{ConfigError, OverrideSpec, Shortcuts, Template};
pub use pipeline::{GenerateError, GenerateRequest, Generated, Generator, OutputNaming};
pub use rec_lang::{classify, Classification, Family, LanguageError, Resolved};
pub use settings::{GeneratorSettings, SettingsError, SettingsOverrides};
pub use summary::RunSummary;
