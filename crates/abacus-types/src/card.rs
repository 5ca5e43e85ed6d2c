// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Capability cards and the agent output envelope.

use serde::{Deserialize, Serialize};

/// Self-description returned by an agent's `get-card` probe.
///
/// Cards are hand-authored literals: producing one performs no I/O and
/// cannot fail. They exist as documentation for discovery and for any
/// future planner; the core never enforces the schemas programmatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Instance name, unique within a deployment
    pub name: String,

    /// One-line description of what the agent does
    pub description: String,

    /// Human-readable capability list, in display order
    pub capabilities: Vec<String>,

    /// Shape of the agent's request payload
    pub input_schema: InputSchema,

    /// Shape of the agent's response payload
    pub output_schema: OutputSchema,
}

impl AgentCard {
    /// Check the card invariant: required and optional input fields
    /// must be disjoint.
    pub fn has_disjoint_input_fields(&self) -> bool {
        self.input_schema
            .required_fields
            .iter()
            .all(|f| !self.input_schema.optional_fields.contains(f))
    }
}

/// Input schema descriptor on a capability card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSchema {
    /// Description of the expected request payload
    pub description: String,

    /// Fields the agent requires
    pub required_fields: Vec<String>,

    /// Fields the agent accepts but does not require
    pub optional_fields: Vec<String>,
}

/// Output schema descriptor on a capability card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSchema {
    /// Description of the response payload
    pub description: String,

    /// Response fields, in display order
    pub fields: Vec<String>,
}

/// Envelope wrapping every agent operation result.
///
/// Agents return `Err(AgentError)` on failure rather than a
/// `success = false` envelope, so an envelope that crosses the wire always
/// has `success = true` and no error. The flag is kept on the wire because
/// callers composing agents check it after each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentOutput<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// The operation result; not meaningful when `success` is false
    pub data: T,

    /// Failure message, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> AgentOutput<T> {
    /// Wrap a successful result.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}
