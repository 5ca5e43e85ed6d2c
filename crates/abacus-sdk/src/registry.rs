// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Agent role registry: logical role to addressable instance name.

use std::env;
use std::fmt;

/// Instance key used when a role runs as a single logical instance.
pub const DEFAULT_INSTANCE_KEY: &str = "default";

/// Logical agent roles known to the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    /// Arithmetic over number sequences
    Calculator,
    /// Statistical analysis, composes the calculator
    Statistics,
    /// Top-level workflow coordinator
    Orchestrator,
}

impl AgentRole {
    /// Role slug used as the suffix of the instance name.
    pub fn slug(&self) -> &'static str {
        match self {
            AgentRole::Calculator => "calculator-agent",
            AgentRole::Statistics => "statistics-agent",
            AgentRole::Orchestrator => "orchestrator",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Roles eligible for discovery, in fixed probe order.
///
/// Deliberately a subset: the orchestrator never discovers itself.
const DISCOVERABLE_ROLES: &[AgentRole] = &[AgentRole::Calculator, AgentRole::Statistics];

/// Fixed mapping from agent role to globally-addressable instance name.
///
/// Instance names are formed as `"{namespace}-{role-slug}"`. The namespace
/// is bound once at construction and never changes afterwards; this is
/// configuration-as-data, read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRegistry {
    namespace: String,
}

impl AgentRegistry {
    /// Create a registry with an explicit deployment namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Load the deployment namespace from the environment.
    ///
    /// Reads `ABACUS_NAMESPACE`, then `ABACUS_RUNTIME_NAMESPACE`, and falls
    /// back to `"local"` when neither is set.
    pub fn from_env() -> Self {
        let namespace = env::var("ABACUS_NAMESPACE")
            .or_else(|_| env::var("ABACUS_RUNTIME_NAMESPACE"))
            .unwrap_or_else(|_| "local".to_string());
        Self { namespace }
    }

    /// The deployment namespace this registry was bound to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The addressable instance name for a role.
    pub fn instance_name(&self, role: AgentRole) -> String {
        format!("{}-{}", self.namespace, role.slug())
    }

    /// Roles eligible for discovery, in fixed probe order.
    pub fn discoverable_roles(&self) -> &'static [AgentRole] {
        DISCOVERABLE_ROLES
    }
}
