//! Training configuration merge engine
//!
//! The base template is loaded once and then rewritten in a fixed order:
//! 1. Family-derived paths (dictionary, model dir, label lists, character type)
//! 2. Caller `key=value` overrides, plain or dotted
//! 3. Named path shortcuts

mod error;
mod merge;
mod overrides;
mod shortcuts;
mod template;

pub use error::ConfigError;
pub use merge::{apply_family, apply_override, apply_overrides, get_path, set_path};
pub use overrides::{parse_override, OverrideSpec, PATH_DELIMITER};
pub use shortcuts::Shortcuts;
pub use template::{Template, TEMPLATE_FILE_NAME};
