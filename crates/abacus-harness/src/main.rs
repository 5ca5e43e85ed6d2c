// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Abacus Harness
//!
//! A binary for running one orchestration end-to-end in isolation. It wires
//! both leaf agents onto the in-memory transport, runs the orchestrator
//! workflow against them, and writes the structured outcome to output.json.
//!
//! ## Input Format (via `INPUT_JSON` env var)
//!
//! ```json
//! {
//!   "operation": "calculate",
//!   "calculationOperation": "add",
//!   "numbers": [1, 2, 3]
//! }
//! ```
//!
//! ## Output Format (written to `output.json`)
//!
//! A `RunOutput` record: `completed` whenever the orchestrator produced a
//! structured outcome (success or business failure), `failed` only for
//! harness-level faults such as missing or unparseable input.

mod output;

use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;

use abacus_agents::{CalculatorAgent, StatisticsAgent};
use abacus_sdk::{AgentClients, AgentRegistry, AgentRole, InMemoryTransport};
use abacus_workflows::{Orchestrator, OrchestratorInput};

use crate::output::RunOutput;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("abacus_workflows=info".parse().unwrap())
                .add_directive("abacus_agents=info".parse().unwrap()),
        )
        .init();

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            let _ = write_failed(format!("Failed to create runtime: {}", e));
            return ExitCode::FAILURE;
        }
    };

    rt.block_on(async_main())
}

async fn async_main() -> ExitCode {
    let input_json = match std::env::var("INPUT_JSON") {
        Ok(json) => json,
        Err(_) => {
            let _ = write_failed("INPUT_JSON environment variable not set");
            return ExitCode::FAILURE;
        }
    };

    let input: OrchestratorInput = match serde_json::from_str(&input_json) {
        Ok(input) => input,
        Err(e) => {
            let _ = write_failed(format!("Failed to parse INPUT_JSON: {}", e));
            return ExitCode::FAILURE;
        }
    };

    let orchestrator = wire_deployment().await;
    let outcome = orchestrator.run(input).await;

    let result = match serde_json::to_value(&outcome) {
        Ok(value) => value,
        Err(e) => {
            let _ = write_failed(format!("Failed to serialize outcome: {}", e));
            return ExitCode::FAILURE;
        }
    };

    match RunOutput::completed(result).write_to_output_file() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write output file: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Wire the full in-memory deployment: registry, transport, both leaf
/// agents (calculator first, then statistics holding a calculator client),
/// and the orchestrator on top.
async fn wire_deployment() -> Orchestrator {
    let registry = AgentRegistry::from_env();
    info!(namespace = %registry.namespace(), "wiring in-memory deployment");

    let transport = Arc::new(InMemoryTransport::new());

    let calculator_name = registry.instance_name(AgentRole::Calculator);
    transport
        .register(
            calculator_name.clone(),
            Arc::new(CalculatorAgent::new(calculator_name)),
        )
        .await;

    let clients = AgentClients::new(registry.clone(), transport.clone());

    let statistics_name = registry.instance_name(AgentRole::Statistics);
    transport
        .register(
            statistics_name.clone(),
            Arc::new(StatisticsAgent::new(
                statistics_name,
                clients.default_client(AgentRole::Calculator),
            )),
        )
        .await;

    info!(agents = transport.registered_count().await, "deployment ready");

    Orchestrator::new(clients)
}

fn write_failed(error: impl Into<String>) -> std::io::Result<()> {
    RunOutput::failed(error).write_to_output_file()
}
