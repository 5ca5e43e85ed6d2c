// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Abacus workflows: agent discovery and the orchestrator.
//!
//! [`discover_agents`] sweeps the registry's discoverable roles and
//! collects capability cards, isolating per-agent failures. The
//! [`Orchestrator`] runs discovery, dispatches one top-level request to a
//! leaf agent, and always returns a structured [`OrchestratorOutput`] -
//! success or failure, never an escaped error.

mod discovery;
mod orchestrator;

pub use discovery::discover_agents;
pub use orchestrator::{Orchestrator, OrchestratorInput, OrchestratorOutput};
