// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Agent discovery: capability card sweep with per-agent failure isolation.

use tracing::{info, warn};

use abacus_sdk::AgentClients;
use abacus_types::AgentCard;

/// Probe every discoverable role for its capability card.
///
/// Roles are probed sequentially in the registry's fixed order and the
/// result preserves probe order. A failed probe (unreachable instance,
/// remote error) is logged and skipped - discovery never fails the caller,
/// it degrades to a partial list, down to an empty list if every probe
/// fails.
pub async fn discover_agents(clients: &AgentClients) -> Vec<AgentCard> {
    info!("starting agent discovery");

    let mut discovered = Vec::new();

    for &role in clients.registry().discoverable_roles() {
        let client = clients.default_client(role);
        let instance_name = client.target().instance_name.clone();
        info!(agent = %instance_name, "discovering agent");

        match client.get_card().await {
            Ok(card) => {
                info!(
                    agent = %instance_name,
                    description = %card.description,
                    "discovered agent"
                );
                discovered.push(card);
            }
            Err(e) => {
                warn!(agent = %instance_name, error = %e, "failed to discover agent");
            }
        }
    }

    info!(count = discovered.len(), "agent discovery complete");
    discovered
}
