//! Run summary for a generated config

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::Path;

use crate::config::get_path;

/// Schema version for the summary JSON
pub const RUN_SUMMARY_SCHEMA_VERSION: u32 = 1;

/// Schema identifier for the summary JSON
pub const RUN_SUMMARY_SCHEMA_ID: &str = "rec-lang-config/run_summary@1";

/// What a generation run produced, read back from the final config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When the config was generated
    pub created_at: DateTime<Utc>,

    /// Project root all relative paths are resolved against
    pub project_path: String,

    /// Language token as requested
    pub language: String,

    /// Family (or token) the paths were derived from
    pub resolved: String,

    /// First entry of `Train.dataset.label_file_list`
    pub train_list: Option<String>,

    /// First entry of `Eval.dataset.label_file_list`
    pub eval_list: Option<String>,

    /// `Eval.dataset.data_dir`
    pub data_dir: Option<String>,

    /// `Global.character_dict_path`
    pub dict_path: Option<String>,

    /// Written config file
    pub output_file: String,

    /// SHA-256 of the base template
    pub template_digest: String,

    /// Override keys in the order they were applied
    #[serde(default)]
    pub applied_overrides: Vec<String>,
}

/// Identity of the run, independent of the config contents.
#[derive(Debug, Clone)]
pub struct RunContext<'a> {
    pub project_path: &'a Path,
    pub language: &'a str,
    pub resolved: &'a str,
    pub output_file: &'a Path,
    pub template_digest: &'a str,
    pub applied_overrides: Vec<String>,
}

impl RunSummary {
    /// Build a summary by reading the resolved paths out of `config`.
    pub fn from_config(config: &Mapping, context: RunContext<'_>) -> Self {
        Self {
            schema_version: RUN_SUMMARY_SCHEMA_VERSION,
            schema_id: RUN_SUMMARY_SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            project_path: context.project_path.display().to_string(),
            language: context.language.to_string(),
            resolved: context.resolved.to_string(),
            train_list: first_entry(config, "Train.dataset.label_file_list"),
            eval_list: first_entry(config, "Eval.dataset.label_file_list"),
            data_dir: get_path(config, "Eval.dataset.data_dir").and_then(scalar_string),
            dict_path: get_path(config, "Global.character_dict_path").and_then(scalar_string),
            output_file: context.output_file.display().to_string(),
            template_digest: context.template_digest.to_string(),
            applied_overrides: context.applied_overrides,
        }
    }

    /// Render the aligned diagnostic lines.
    pub fn to_human(&self) -> String {
        let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        [
            format!("Project path is          :{}", self.project_path),
            format!("Train list path set to   :{}", show(&self.train_list)),
            format!("Eval list path set to    :{}", show(&self.eval_list)),
            format!("Dataset root path set to :{}", show(&self.data_dir)),
            format!("Dict path set to         :{}", show(&self.dict_path)),
            format!("Config file set to       :{}", self.output_file),
        ]
        .join("\n")
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn first_entry(config: &Mapping, key: &str) -> Option<String> {
    match get_path(config, key)? {
        Value::Sequence(entries) => entries.first().and_then(scalar_string),
        other => scalar_string(other),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Mapping {
        serde_yaml::from_str(
            "Global: {character_dict_path: ppocr/utils/dict/latin_dict.txt}\n\
             Train: {dataset: {data_dir: train_data/, label_file_list: [train_data/latin_train.txt]}}\n\
             Eval: {dataset: {data_dir: eval_data/, label_file_list: [train_data/latin_val.txt, extra.txt]}}",
        )
        .unwrap()
    }

    fn context() -> RunContext<'static> {
        RunContext {
            project_path: Path::new("/repo"),
            language: "it",
            resolved: "latin",
            output_file: Path::new("/repo/configs/rec/multi_language/rec_latin_lite_train.yml"),
            template_digest: "abc123",
            applied_overrides: vec!["Global.epoch_num".to_string()],
        }
    }

    #[test]
    fn test_from_config() {
        let summary = RunSummary::from_config(&config(), context());

        assert_eq!(summary.schema_id, RUN_SUMMARY_SCHEMA_ID);
        assert_eq!(summary.train_list.as_deref(), Some("train_data/latin_train.txt"));
        assert_eq!(summary.eval_list.as_deref(), Some("train_data/latin_val.txt"));
        assert_eq!(summary.data_dir.as_deref(), Some("eval_data/"));
        assert_eq!(
            summary.dict_path.as_deref(),
            Some("ppocr/utils/dict/latin_dict.txt")
        );
        assert_eq!(summary.language, "it");
        assert_eq!(summary.resolved, "latin");
    }

    #[test]
    fn test_missing_fields_are_none() {
        let summary = RunSummary::from_config(&Mapping::new(), context());
        assert!(summary.train_list.is_none());
        assert!(summary.dict_path.is_none());
        assert!(summary.to_human().contains("Dict path set to         :-"));
    }

    #[test]
    fn test_to_human() {
        let human = RunSummary::from_config(&config(), context()).to_human();
        let lines: Vec<&str> = human.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Project path is          :/repo");
        assert_eq!(lines[1], "Train list path set to   :train_data/latin_train.txt");
        assert_eq!(lines[3], "Dataset root path set to :eval_data/");
        assert!(lines[5].ends_with("rec_latin_lite_train.yml"));
    }

    #[test]
    fn test_to_json() {
        let summary = RunSummary::from_config(&config(), context());
        let json = summary.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["resolved"], "latin");
        assert_eq!(parsed["applied_overrides"][0], "Global.epoch_num");
        assert_eq!(parsed["schema_version"], 1);
    }
}
