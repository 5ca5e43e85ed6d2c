// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! In-memory transport backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::backend::{AgentService, AgentTransport, GET_CARD_OPERATION};
use crate::client::AgentTarget;
use crate::error::{ClientError, Result};

/// Transport that routes instance names to in-process services.
///
/// The service table is written only while the deployment is being wired
/// and read afterwards. Instance keys are accepted and logged but do not
/// partition further: each registered name is one logical instance, which
/// matches a deployment where every role runs under the default key.
pub struct InMemoryTransport {
    services: RwLock<HashMap<String, Arc<dyn AgentService>>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(HashMap::new()),
        }
    }

    /// Register a service under an instance name, replacing any previous
    /// registration for that name.
    pub async fn register(&self, instance_name: impl Into<String>, service: Arc<dyn AgentService>) {
        let instance_name = instance_name.into();
        debug!(instance = %instance_name, "registering in-memory agent");
        self.services.write().await.insert(instance_name, service);
    }

    /// Number of registered services.
    pub async fn registered_count(&self) -> usize {
        self.services.read().await.len()
    }
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentTransport for InMemoryTransport {
    async fn call(&self, target: &AgentTarget, operation: &str, payload: Value) -> Result<Value> {
        let service = self
            .services
            .read()
            .await
            .get(&target.instance_name)
            .cloned()
            .ok_or_else(|| ClientError::UnknownTarget(target.instance_name.clone()))?;

        debug!(
            instance = %target.instance_name,
            key = %target.key,
            operation = %operation,
            "dispatching in-memory call"
        );

        if operation == GET_CARD_OPERATION {
            return serde_json::to_value(service.card()).map_err(Into::into);
        }

        service
            .invoke(operation, payload)
            .await
            .map_err(ClientError::Agent)
    }
}
