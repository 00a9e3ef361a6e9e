//! Test fixtures
//!
//! - Multi-language base template, as shipped next to the generator

use std::path::{Path, PathBuf};

/// Directory holding the base template fixture
pub fn multi_language_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/multi_language")
}

/// Path to the base template fixture
pub fn template_path() -> PathBuf {
    multi_language_dir().join("rec_multi_language_lite_train.yml")
}
