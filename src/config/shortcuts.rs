//! Named dataset/dictionary shortcuts (`--train`, `--val`, `--dict`, `--data-dir`)

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::Path;

use super::error::ConfigError;
use super::merge::{set_path, single_entry_list};

/// Optional path shortcuts, each resolved against the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcuts {
    /// Training label list; replaces `Train.dataset.label_file_list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train: Option<String>,

    /// Evaluation label list; replaces `Eval.dataset.label_file_list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,

    /// Character dictionary; replaces `Global.character_dict_path`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dict: Option<String>,

    /// Dataset root; replaces both `Train.dataset.data_dir` and `Eval.dataset.data_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

impl Shortcuts {
    pub fn is_empty(&self) -> bool {
        self.train.is_none() && self.val.is_none() && self.dict.is_none() && self.data_dir.is_none()
    }

    /// Verify and apply every supplied shortcut.
    ///
    /// Checked in train, val, dict, data_dir order; the first path missing
    /// under `project_root` aborts before any later shortcut is applied.
    pub fn apply(&self, config: &mut Mapping, project_root: &Path) -> Result<(), ConfigError> {
        if let Some(train) = &self.train {
            require_exists(project_root, train, "training label list")?;
            set_path(config, "Train.dataset.label_file_list", single_entry_list(train))?;
        }
        if let Some(val) = &self.val {
            require_exists(project_root, val, "evaluation label list")?;
            set_path(config, "Eval.dataset.label_file_list", single_entry_list(val))?;
        }
        if let Some(dict) = &self.dict {
            require_exists(project_root, dict, "dictionary")?;
            set_path(
                config,
                "Global.character_dict_path",
                Value::String(dict.clone()),
            )?;
        }
        if let Some(data_dir) = &self.data_dir {
            require_exists(project_root, data_dir, "dataset root")?;
            set_path(config, "Eval.dataset.data_dir", Value::String(data_dir.clone()))?;
            set_path(config, "Train.dataset.data_dir", Value::String(data_dir.clone()))?;
        }
        Ok(())
    }
}

fn require_exists(project_root: &Path, relative: &str, what: &str) -> Result<(), ConfigError> {
    let path = project_root.join(relative);
    if path.exists() {
        Ok(())
    } else {
        Err(ConfigError::MissingResource {
            what: what.to_string(),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_path;
    use std::fs;
    use tempfile::TempDir;

    fn base() -> Mapping {
        serde_yaml::from_str(
            "Global: {character_dict_path: ppocr/utils/dict/latin_dict.txt}\n\
             Train: {dataset: {data_dir: train_data/, label_file_list: [a.txt]}}\n\
             Eval: {dataset: {data_dir: train_data/, label_file_list: [b.txt]}}",
        )
        .unwrap()
    }

    #[test]
    fn test_empty_shortcuts_are_noop() {
        let root = TempDir::new().unwrap();
        let mut config = base();
        let shortcuts = Shortcuts::default();
        assert!(shortcuts.is_empty());
        shortcuts.apply(&mut config, root.path()).unwrap();
        assert_eq!(config, base());
    }

    #[test]
    fn test_all_shortcuts_applied() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("data/images")).unwrap();
        fs::write(root.path().join("data/train.txt"), "").unwrap();
        fs::write(root.path().join("data/val.txt"), "").unwrap();
        fs::write(root.path().join("data/my_dict.txt"), "a\nb\n").unwrap();

        let shortcuts = Shortcuts {
            train: Some("data/train.txt".to_string()),
            val: Some("data/val.txt".to_string()),
            dict: Some("data/my_dict.txt".to_string()),
            data_dir: Some("data/images".to_string()),
        };
        let mut config = base();
        shortcuts.apply(&mut config, root.path()).unwrap();

        let list = |key| {
            get_path(&config, key)
                .and_then(Value::as_sequence)
                .map(|seq| seq.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        };
        assert_eq!(list("Train.dataset.label_file_list"), Some(vec!["data/train.txt"]));
        assert_eq!(list("Eval.dataset.label_file_list"), Some(vec!["data/val.txt"]));
        assert_eq!(
            get_path(&config, "Global.character_dict_path").and_then(Value::as_str),
            Some("data/my_dict.txt")
        );
        assert_eq!(
            get_path(&config, "Train.dataset.data_dir").and_then(Value::as_str),
            Some("data/images")
        );
        assert_eq!(
            get_path(&config, "Eval.dataset.data_dir").and_then(Value::as_str),
            Some("data/images")
        );
    }

    #[test]
    fn test_missing_shortcut_path_is_reported() {
        let root = TempDir::new().unwrap();
        let shortcuts = Shortcuts {
            val: Some("train_data/missing_val.txt".to_string()),
            ..Default::default()
        };
        let mut config = base();
        let err = shortcuts.apply(&mut config, root.path()).unwrap_err();

        match &err {
            ConfigError::MissingResource { what, path } => {
                assert_eq!(what, "evaluation label list");
                assert!(path.ends_with("train_data/missing_val.txt"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("missing_val.txt"));
        assert_eq!(config, base());
    }

    #[test]
    fn test_absolute_shortcut_path() {
        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let train = elsewhere.path().join("train.txt");
        fs::write(&train, "").unwrap();

        let shortcuts = Shortcuts {
            train: Some(train.display().to_string()),
            ..Default::default()
        };
        let mut config = base();
        shortcuts.apply(&mut config, root.path()).unwrap();
    }
}
