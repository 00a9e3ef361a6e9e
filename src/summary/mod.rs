//! Summary of a generation run
//!
//! Reports the resolved project path and the four key paths of the final
//! config, for log output and `--json`.

mod run_summary;

pub use run_summary::{RunContext, RunSummary, RUN_SUMMARY_SCHEMA_ID, RUN_SUMMARY_SCHEMA_VERSION};
