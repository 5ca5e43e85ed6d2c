// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Keyed agent clients.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use abacus_types::AgentCard;

use crate::backend::{AgentTransport, GET_CARD_OPERATION};
use crate::error::Result;
use crate::registry::{AgentRegistry, AgentRole, DEFAULT_INSTANCE_KEY};

/// Address of one call target: instance name plus routing key.
///
/// The key selects a specific stateful instance of the target role. In this
/// deployment every role runs as a single logical instance under
/// [`DEFAULT_INSTANCE_KEY`], but the addressing scheme carries arbitrary
/// keys end-to-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTarget {
    /// Namespace-prefixed instance name
    pub instance_name: String,
    /// Partition/routing key
    pub key: String,
}

impl AgentTarget {
    pub fn new(instance_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            key: key.into(),
        }
    }
}

/// Addressable handle to a named agent instance.
///
/// Every operation is a remote call through the transport; the client holds
/// no state beyond the address. Clones share the underlying transport.
#[derive(Clone)]
pub struct AgentClient {
    transport: Arc<dyn AgentTransport>,
    target: AgentTarget,
}

impl AgentClient {
    pub fn new(transport: Arc<dyn AgentTransport>, target: AgentTarget) -> Self {
        Self { transport, target }
    }

    /// The address this client calls.
    pub fn target(&self) -> &AgentTarget {
        &self.target
    }

    /// Fetch the target agent's capability card.
    pub async fn get_card(&self) -> Result<AgentCard> {
        let value = self
            .transport
            .call(&self.target, GET_CARD_OPERATION, serde_json::Value::Null)
            .await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Invoke a domain operation with a typed request and response.
    pub async fn call<I, O>(&self, operation: &str, input: &I) -> Result<O>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let payload = serde_json::to_value(input)?;
        let value = self.transport.call(&self.target, operation, payload).await?;
        serde_json::from_value(value).map_err(Into::into)
    }
}

impl std::fmt::Debug for AgentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentClient")
            .field("target", &self.target)
            .finish()
    }
}

/// Factory producing keyed clients from a registry and a transport.
///
/// Constructed once at process start and passed by reference to every
/// component that needs to address an agent.
#[derive(Clone)]
pub struct AgentClients {
    registry: AgentRegistry,
    transport: Arc<dyn AgentTransport>,
}

impl AgentClients {
    pub fn new(registry: AgentRegistry, transport: Arc<dyn AgentTransport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// The registry this factory resolves roles against.
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Produce a client for a role under a specific instance key.
    pub fn client(&self, role: AgentRole, instance_key: &str) -> AgentClient {
        let target = AgentTarget::new(self.registry.instance_name(role), instance_key);
        AgentClient::new(Arc::clone(&self.transport), target)
    }

    /// Produce a client for a role under [`DEFAULT_INSTANCE_KEY`].
    pub fn default_client(&self, role: AgentRole) -> AgentClient {
        self.client(role, DEFAULT_INSTANCE_KEY)
    }
}

impl std::fmt::Debug for AgentClients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentClients")
            .field("registry", &self.registry)
            .finish()
    }
}
