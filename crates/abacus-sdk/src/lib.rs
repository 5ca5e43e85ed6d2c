// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Abacus SDK - agent addressing and keyed client transport.
//!
//! This crate provides the plumbing every abacus component uses to reach an
//! agent:
//!
//! - **Registry**: [`AgentRegistry`] binds each [`AgentRole`] to a
//!   namespace-prefixed instance name once at construction. The binding is
//!   fixed for the process lifetime and the registry is passed by reference
//!   to every component that needs addressing - there is no ambient global
//!   lookup.
//! - **Keyed clients**: [`AgentClients`] produces an [`AgentClient`] for a
//!   `(role, instance key)` pair. All agent-to-agent calls go through this
//!   indirection, which is the seam that lets agents be relocated, retried,
//!   or mocked without changing calling code.
//! - **Transport**: [`AgentTransport`] abstracts the call-routing layer.
//!   The bundled [`InMemoryTransport`] routes instance names to registered
//!   [`AgentService`] implementations and stands in for the host runtime in
//!   tests and the demo harness.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use abacus_sdk::{AgentClients, AgentRegistry, AgentRole, InMemoryTransport};
//!
//! let registry = AgentRegistry::from_env();
//! let transport = Arc::new(InMemoryTransport::new());
//! transport.register(registry.instance_name(AgentRole::Calculator), calculator).await;
//!
//! let clients = AgentClients::new(registry, transport);
//! let card = clients.default_client(AgentRole::Calculator).get_card().await?;
//! ```

mod backend;
mod client;
mod error;
mod registry;

pub use backend::in_memory::InMemoryTransport;
pub use backend::{AgentService, AgentTransport, GET_CARD_OPERATION};
pub use client::{AgentClient, AgentClients, AgentTarget};
pub use error::{ClientError, Result};
pub use registry::{AgentRegistry, AgentRole, DEFAULT_INSTANCE_KEY};
