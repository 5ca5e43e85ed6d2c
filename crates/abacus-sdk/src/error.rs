// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Client-side error types.

use abacus_types::AgentError;
use thiserror::Error;

/// Errors that can occur when calling an agent through a client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No agent is registered under the target instance name
    #[error("no agent registered for instance '{0}'")]
    UnknownTarget(String),

    /// The transport could not deliver the call
    #[error("agent '{instance}' unreachable: {reason}")]
    Unreachable {
        /// Target instance name
        instance: String,
        /// Transport-level failure description
        reason: String,
    },

    /// The remote agent returned a structured error
    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    /// Request or response (de)serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Whether the failure is transient infrastructure trouble rather than
    /// a terminal outcome of the call itself.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Unreachable { .. } => true,
            ClientError::Agent(err) => err.should_retry(),
            ClientError::UnknownTarget(_) | ClientError::Serialization(_) => false,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

/// Type alias for client results.
pub type Result<T> = std::result::Result<T, ClientError>;
