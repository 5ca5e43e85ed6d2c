// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Orchestrator workflow.
//!
//! One terminal pass per request: discover, dispatch to a leaf agent,
//! aggregate. Every failure from any step is converted into a structured
//! `success = false` output - the orchestrator never lets an error escape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use abacus_agents::{
    ANALYZE_NUMBERS_OPERATION, CALCULATE_OPERATION, CalculationInput, CalculationResult,
    StatisticsInput, StatisticsResult,
};
use abacus_sdk::{AgentClients, AgentRole, ClientError};
use abacus_types::{AgentError, AgentOutput};

use crate::discovery::discover_agents;

/// Top-level orchestration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorInput {
    /// Top-level operation: `calculate` or `analyze`
    pub operation: String,

    /// Numbers handed to the selected leaf agent
    pub numbers: Vec<f64>,

    /// Arithmetic operation tag, required when `operation` is `calculate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_operation: Option<String>,
}

/// Structured orchestration outcome.
///
/// `agents_used` lists every agent instance actually invoked during the
/// run, in call order, with indirect (agent-calling-agent) invocations
/// annotated. On failure it holds the partial trail accumulated before the
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorOutput {
    pub success: bool,
    pub result: Option<Value>,
    pub agents_used: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Top-level workflow coordinator.
pub struct Orchestrator {
    clients: AgentClients,
}

impl Orchestrator {
    pub fn new(clients: AgentClients) -> Self {
        Self { clients }
    }

    /// Run one orchestration.
    ///
    /// Discovery runs first and never blocks completion - its failures are
    /// logged only. Dispatch routes `calculate` to the calculator agent and
    /// `analyze` to the statistics agent (which re-enters the calculator
    /// internally); any other operation tag is an immediate terminal
    /// failure. The returned value is always well-formed, success or not.
    pub async fn run(&self, input: OrchestratorInput) -> OrchestratorOutput {
        info!(
            operation = %input.operation,
            numbers = ?input.numbers,
            "orchestrator workflow started"
        );

        let available = discover_agents(&self.clients).await;
        for card in &available {
            info!(agent = %card.name, description = %card.description, "available agent");
        }

        let mut agents_used = Vec::new();
        match self.dispatch(&input, &mut agents_used).await {
            Ok(result) => {
                info!(agents = ?agents_used, "orchestrator workflow completed");
                OrchestratorOutput {
                    success: true,
                    result: Some(result),
                    agents_used,
                    error: None,
                }
            }
            Err(e) => {
                error!(error = %e, "orchestrator workflow failed");
                OrchestratorOutput {
                    success: false,
                    result: None,
                    agents_used,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn dispatch(
        &self,
        input: &OrchestratorInput,
        agents_used: &mut Vec<String>,
    ) -> Result<Value, ClientError> {
        match input.operation.as_str() {
            "calculate" => {
                let operation = input.calculation_operation.as_deref().ok_or_else(|| {
                    ClientError::Agent(AgentError::permanent(
                        "INVALID_INPUT",
                        "calculationOperation is required for calculate operation",
                    ))
                })?;

                info!(operation = %operation, "performing calculation");

                let client = self.clients.default_client(AgentRole::Calculator);
                let output: AgentOutput<CalculationResult> = client
                    .call(
                        CALCULATE_OPERATION,
                        &CalculationInput {
                            operation: operation.to_string(),
                            numbers: input.numbers.clone(),
                        },
                    )
                    .await?;

                agents_used.push(client.target().instance_name.clone());
                info!(result = output.data.result, "calculation complete");

                serde_json::to_value(output.data).map_err(Into::into)
            }
            "analyze" => {
                info!("performing statistical analysis");

                let client = self.clients.default_client(AgentRole::Statistics);
                let output: AgentOutput<StatisticsResult> = client
                    .call(
                        ANALYZE_NUMBERS_OPERATION,
                        &StatisticsInput {
                            numbers: input.numbers.clone(),
                        },
                    )
                    .await?;

                agents_used.push(client.target().instance_name.clone());
                agents_used.push(format!(
                    "{} (called by Statistics Agent)",
                    self.clients
                        .registry()
                        .instance_name(AgentRole::Calculator)
                ));
                info!(
                    count = output.data.count,
                    mean = output.data.mean,
                    median = output.data.median,
                    "analysis complete"
                );

                serde_json::to_value(output.data).map_err(Into::into)
            }
            other => Err(ClientError::Agent(
                AgentError::permanent(
                    "UNKNOWN_OPERATION",
                    format!("unknown operation: {}", other),
                )
                .with_attr("operation", other),
            )),
        }
    }
}
