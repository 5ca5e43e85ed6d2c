// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Run output handling for the harness binary.
//!
//! The harness communicates its exit state via an output.json file, so a
//! caller can distinguish "the orchestration produced a structured outcome"
//! from "the harness itself fell over". The output path defaults to
//! `output.json` in the working directory and can be overridden with
//! `ABACUS_OUTPUT_PATH`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The orchestration produced a structured outcome (success or not)
    Completed,
    /// The harness failed before a structured outcome existed
    Failed,
}

/// Record written to output.json on exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// The status/reason for exit
    pub status: RunStatus,

    /// Orchestration result (for completed status)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// Error message (for failed status)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,
}

impl RunOutput {
    /// Create a completed output.
    pub fn completed(result: serde_json::Value) -> Self {
        Self {
            status: RunStatus::Completed,
            result: Some(result),
            error: None,
            finished_at: Utc::now(),
        }
    }

    /// Create a failed output.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Failed,
            result: None,
            error: Some(error.into()),
            finished_at: Utc::now(),
        }
    }

    /// Write the record to the output file location.
    pub fn write_to_output_file(&self) -> std::io::Result<()> {
        let path = output_file_path();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        std::fs::write(path, json)
    }
}

fn output_file_path() -> PathBuf {
    std::env::var("ABACUS_OUTPUT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("output.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completed_output_shape() {
        let output = RunOutput::completed(json!({ "success": true }));
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["status"], json!("completed"));
        assert_eq!(value["result"]["success"], json!(true));
        assert!(value.get("error").is_none());
        assert!(value.get("finished_at").is_some());
    }

    #[test]
    fn test_failed_output_shape() {
        let output = RunOutput::failed("INPUT_JSON environment variable not set");
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["status"], json!("failed"));
        assert!(value.get("result").is_none());
        assert_eq!(
            value["error"],
            json!("INPUT_JSON environment variable not set")
        );
    }
}
