// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Structured errors for agent operations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error category for retry/routing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Temporary failure - retry is likely to succeed
    Transient,
    /// Terminal failure - don't auto-retry, human fix may help
    Permanent,
}

/// Error severity for logging/alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Expected or recoverable condition
    Warning,
    /// Technical failure
    Error,
    /// Failure requiring immediate attention
    Critical,
}

/// Structured error for agent operations.
///
/// Provides error classification for proper handling:
/// - **Transient**: temporary failures (transport unreachable, timeout) -
///   the call layer may retry
/// - **Permanent**: terminal failures (validation, unknown operation,
///   division by zero) - surfaced to the immediate caller, never retried
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentError {
    /// Machine-readable error code (e.g., "EMPTY_INPUT", "DIVISION_BY_ZERO")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Error category for retry/routing decisions
    pub category: ErrorCategory,

    /// Error severity for logging/alerting
    pub severity: ErrorSeverity,

    /// Additional context attributes
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl AgentError {
    /// Create a transient error (retry likely to succeed).
    ///
    /// Use for: transport failures, timeouts, temporary unavailability.
    pub fn transient(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: ErrorCategory::Transient,
            severity: ErrorSeverity::Warning,
            attributes: HashMap::new(),
        }
    }

    /// Create a permanent error (terminal, don't auto-retry).
    ///
    /// Use for: validation errors, unknown operation tags, arithmetic
    /// domain failures, downstream composition failures.
    pub fn permanent(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: ErrorCategory::Permanent,
            severity: ErrorSeverity::Error,
            attributes: HashMap::new(),
        }
    }

    /// Set the error severity.
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Add a context attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Should the caller retry this error?
    pub fn should_retry(&self) -> bool {
        self.category == ErrorCategory::Transient
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AgentError {}
