//! Paths derived from a resolved family name.

use serde::{Deserialize, Serialize};

/// Dictionary directory, relative to the project root.
pub const DICT_DIR: &str = "ppocr/utils/dict";

/// Label-list directory, relative to the project root.
pub const TRAIN_DATA_DIR: &str = "train_data";

/// Config fields written for a resolved family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyPaths {
    /// `Global.character_dict_path`
    pub character_dict_path: String,
    /// `Global.save_model_dir`
    pub save_model_dir: String,
    /// Sole entry of `Train.dataset.label_file_list`
    pub train_label_list: String,
    /// Sole entry of `Eval.dataset.label_file_list`
    pub eval_label_list: String,
    /// `Global.character_type`
    pub character_type: String,
}

impl FamilyPaths {
    /// Derive every path from the family value `name`.
    pub fn for_name(name: &str) -> Self {
        Self {
            character_dict_path: format!("{}/{}_dict.txt", DICT_DIR, name),
            save_model_dir: format!("./output/rec_{}_lite", name),
            train_label_list: format!("{}/{}_train.txt", TRAIN_DATA_DIR, name),
            eval_label_list: format!("{}/{}_val.txt", TRAIN_DATA_DIR, name),
            character_type: name.to_string(),
        }
    }

    /// File name of the dictionary, without its directory.
    pub fn dict_file_name(&self) -> &str {
        self.character_dict_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.character_dict_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_for_latin() {
        let paths = FamilyPaths::for_name("latin");
        assert_eq!(paths.character_dict_path, "ppocr/utils/dict/latin_dict.txt");
        assert_eq!(paths.save_model_dir, "./output/rec_latin_lite");
        assert_eq!(paths.train_label_list, "train_data/latin_train.txt");
        assert_eq!(paths.eval_label_list, "train_data/latin_val.txt");
        assert_eq!(paths.character_type, "latin");
    }

    #[test]
    fn test_dict_file_name() {
        let paths = FamilyPaths::for_name("chinese_cht");
        assert_eq!(paths.dict_file_name(), "chinese_cht_dict.txt");
    }
}
