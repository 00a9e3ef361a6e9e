//! Override application
//!
//! Implements the merge rules for caller overrides:
//! - Plain keys: shallow-merge when both sides are mappings, otherwise replace.
//!   Unknown plain keys are added at the top level.
//! - Dotted keys: the root must already exist and every intermediate segment
//!   must resolve to an existing mapping; only the leaf is created/replaced.

use rec_lang::FamilyPaths;
use serde_yaml::{Mapping, Value};

use super::error::ConfigError;
use super::overrides::{OverrideSpec, PATH_DELIMITER};

/// Write the family-derived fields into the config.
pub fn apply_family(config: &mut Mapping, paths: &FamilyPaths) -> Result<(), ConfigError> {
    set_path(
        config,
        "Global.character_dict_path",
        Value::String(paths.character_dict_path.clone()),
    )?;
    set_path(
        config,
        "Global.save_model_dir",
        Value::String(paths.save_model_dir.clone()),
    )?;
    set_path(
        config,
        "Train.dataset.label_file_list",
        single_entry_list(&paths.train_label_list),
    )?;
    set_path(
        config,
        "Eval.dataset.label_file_list",
        single_entry_list(&paths.eval_label_list),
    )?;
    set_path(
        config,
        "Global.character_type",
        Value::String(paths.character_type.clone()),
    )
}

/// Apply every override in order; later entries see the effect of earlier ones.
pub fn apply_overrides(config: &mut Mapping, overrides: &OverrideSpec) -> Result<(), ConfigError> {
    for (key, value) in overrides.iter() {
        apply_override(config, key, value.clone())?;
    }
    Ok(())
}

/// Apply a single override.
pub fn apply_override(config: &mut Mapping, key: &str, value: Value) -> Result<(), ConfigError> {
    if key.contains(PATH_DELIMITER) {
        return set_path(config, key, value);
    }

    match (config.get_mut(key), value) {
        // Both mappings: shallow merge, untouched keys survive
        (Some(Value::Mapping(existing)), Value::Mapping(update)) => {
            for (k, v) in update {
                existing.insert(k, v);
            }
        }
        (_, value) => {
            config.insert(Value::String(key.to_string()), value);
        }
    }
    Ok(())
}

/// Set the leaf addressed by a dotted `key`, without creating intermediates.
pub fn set_path(config: &mut Mapping, key: &str, value: Value) -> Result<(), ConfigError> {
    let segments: Vec<&str> = key.split(PATH_DELIMITER).collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(invalid(key, key, "is empty"));
    };
    let Some((root, intermediates)) = parents.split_first() else {
        config.insert(Value::String(leaf.to_string()), value);
        return Ok(());
    };

    let mut current = match config.get_mut(*root) {
        Some(node) => node,
        None => return Err(unknown_root(config, key, root)),
    };
    let mut parent = *root;

    for segment in intermediates {
        current = match current {
            Value::Mapping(map) => map
                .get_mut(*segment)
                .ok_or_else(|| invalid(key, segment, "does not exist"))?,
            _ => return Err(invalid(key, parent, "is not a mapping")),
        };
        parent = *segment;
    }

    match current {
        Value::Mapping(map) => {
            map.insert(Value::String(leaf.to_string()), value);
            Ok(())
        }
        _ => Err(invalid(key, parent, "is not a mapping")),
    }
}

/// Look up a dotted path, returning `None` if any segment is missing.
pub fn get_path<'a>(config: &'a Mapping, key: &str) -> Option<&'a Value> {
    let mut segments = key.split(PATH_DELIMITER);
    let mut current = config.get(segments.next()?)?;
    for segment in segments {
        current = current.as_mapping()?.get(segment)?;
    }
    Some(current)
}

pub(crate) fn single_entry_list(entry: &str) -> Value {
    Value::Sequence(vec![Value::String(entry.to_string())])
}

fn invalid(key: &str, segment: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidPath {
        key: key.to_string(),
        segment: segment.to_string(),
        reason,
    }
}

fn unknown_root(config: &Mapping, key: &str, root: &str) -> ConfigError {
    let available: Vec<&str> = config.keys().filter_map(Value::as_str).collect();
    ConfigError::UnknownRootKey {
        key: key.to_string(),
        root: root.to_string(),
        available: available.join(", "),
    }
}
