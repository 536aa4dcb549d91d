//! Integration test modules.

mod analyze_pipeline_test;
mod report_history_test;
