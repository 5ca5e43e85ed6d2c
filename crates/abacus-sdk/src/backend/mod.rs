// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Transport backends.
//!
//! The [`AgentTransport`] trait abstracts the call-routing layer. Address
//! resolution, delivery guarantees, timeouts, and retries all belong to the
//! transport - callers only see an independent request/response round trip
//! per call. The bundled [`in_memory`] backend routes calls directly to
//! registered services and stands in for the host runtime in tests and the
//! demo harness.

pub mod in_memory;

use async_trait::async_trait;
use serde_json::Value;

use abacus_types::{AgentCard, AgentError};

use crate::client::AgentTarget;
use crate::error::Result;

/// Operation id of the capability card probe every agent answers.
pub const GET_CARD_OPERATION: &str = "get-card";

/// Transport seam for agent calls.
///
/// Each call is an independent request/response round trip with its own
/// success/failure outcome; no state is shared with the caller beyond the
/// single request payload.
#[async_trait]
pub trait AgentTransport: Send + Sync {
    /// Deliver one operation call to the target instance.
    async fn call(&self, target: &AgentTarget, operation: &str, payload: Value) -> Result<Value>;
}

/// A registered agent: a capability card plus a set of domain operations.
///
/// Services are stateless relative to the workflow - every invocation
/// operates on that call's input only.
#[async_trait]
pub trait AgentService: Send + Sync {
    /// The agent's self-description. Returns a literal; cannot fail.
    fn card(&self) -> AgentCard;

    /// Invoke a domain operation with a JSON payload.
    async fn invoke(
        &self,
        operation: &str,
        payload: Value,
    ) -> std::result::Result<Value, AgentError>;
}
