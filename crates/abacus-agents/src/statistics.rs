// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Statistics agent: statistical measures over number sequences.
//!
//! Sum, mean, even-count median, and range are delegated to the calculator
//! agent through an injected client; only count, min, max, and odd-count
//! median are computed locally, since they need ordering/selection logic
//! rather than a fold. Any calculator failure aborts the whole analysis -
//! no partial statistics are returned.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use abacus_sdk::{AgentClient, AgentService};
use abacus_types::{AgentCard, AgentError, AgentOutput, InputSchema, OutputSchema};

use crate::calculator::{
    CALCULATE_OPERATION, CalculationInput, CalculationOperation, CalculationResult,
};

/// Operation id of the statistics agent's single domain operation.
pub const ANALYZE_NUMBERS_OPERATION: &str = "analyze-numbers";

/// Request payload for [`ANALYZE_NUMBERS_OPERATION`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsInput {
    /// Numbers to analyze
    pub numbers: Vec<f64>,
}

/// Statistical measures over one input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

/// Statistics agent composing the calculator for its arithmetic.
///
/// The calculator handle is injected at construction; the agent never
/// resolves an address itself, so tests can substitute any transport.
pub struct StatisticsAgent {
    instance_name: String,
    calculator: AgentClient,
}

impl StatisticsAgent {
    pub fn new(instance_name: impl Into<String>, calculator: AgentClient) -> Self {
        Self {
            instance_name: instance_name.into(),
            calculator,
        }
    }

    /// Analyze a non-empty number sequence.
    ///
    /// Fails with `EMPTY_INPUT` on an empty sequence and with
    /// `CALCULATOR_CALL_FAILED` when any delegated arithmetic call fails;
    /// both are terminal.
    pub async fn analyze_numbers(
        &self,
        input: &StatisticsInput,
    ) -> Result<StatisticsResult, AgentError> {
        info!(
            agent = %self.instance_name,
            count = input.numbers.len(),
            "analyzing numbers"
        );

        if input.numbers.is_empty() {
            return Err(AgentError::permanent(
                "EMPTY_INPUT",
                "no numbers provided for analysis",
            ));
        }

        let count = input.numbers.len();

        let sum = self
            .delegate(CalculationOperation::Add, input.numbers.clone(), "sum")
            .await?;

        let mean = self
            .delegate(CalculationOperation::Divide, vec![sum, count as f64], "mean")
            .await?;

        let mut sorted = input.numbers.clone();
        sorted.sort_by(f64::total_cmp);
        let midpoint = count / 2;
        let median = if count % 2 == 0 {
            let middle_sum = self
                .delegate(
                    CalculationOperation::Add,
                    vec![sorted[midpoint - 1], sorted[midpoint]],
                    "median",
                )
                .await?;
            self.delegate(CalculationOperation::Divide, vec![middle_sum, 2.0], "median")
                .await?
        } else {
            sorted[midpoint]
        };

        let min = input.numbers.iter().copied().fold(f64::INFINITY, f64::min);
        let max = input
            .numbers
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let range = self
            .delegate(CalculationOperation::Subtract, vec![max, min], "range")
            .await?;

        info!(agent = %self.instance_name, mean, median, range, "analysis complete");

        Ok(StatisticsResult {
            count,
            sum,
            mean,
            median,
            min,
            max,
            range,
        })
    }

    /// Run one calculator operation and unwrap its envelope.
    async fn delegate(
        &self,
        operation: CalculationOperation,
        numbers: Vec<f64>,
        measure: &str,
    ) -> Result<f64, AgentError> {
        info!(
            agent = %self.instance_name,
            measure,
            operation = %operation,
            "delegating to calculator agent"
        );

        let output: AgentOutput<CalculationResult> = self
            .calculator
            .call(
                CALCULATE_OPERATION,
                &CalculationInput {
                    operation: operation.to_string(),
                    numbers,
                },
            )
            .await
            .map_err(|e| {
                AgentError::permanent(
                    "CALCULATOR_CALL_FAILED",
                    format!("failed to compute {}: {}", measure, e),
                )
                .with_attr("measure", measure)
            })?;

        if !output.success {
            return Err(AgentError::permanent(
                "CALCULATOR_CALL_FAILED",
                format!("failed to compute {}", measure),
            )
            .with_attr("measure", measure));
        }

        Ok(output.data.result)
    }
}

#[async_trait]
impl AgentService for StatisticsAgent {
    fn card(&self) -> AgentCard {
        AgentCard {
            name: self.instance_name.clone(),
            description: "Calculates statistical measures from a list of numbers".to_string(),
            capabilities: vec![
                "Calculate mean (average)".to_string(),
                "Find median value".to_string(),
                "Determine min and max values".to_string(),
                "Calculate range".to_string(),
                "Uses Calculator Agent for arithmetic operations".to_string(),
            ],
            input_schema: InputSchema {
                description: "Array of numbers to analyze".to_string(),
                required_fields: vec!["numbers".to_string()],
                optional_fields: vec![],
            },
            output_schema: OutputSchema {
                description: "Statistical measures including mean, median, min, max, and range"
                    .to_string(),
                fields: vec![
                    "count".to_string(),
                    "sum".to_string(),
                    "mean".to_string(),
                    "median".to_string(),
                    "min".to_string(),
                    "max".to_string(),
                    "range".to_string(),
                ],
            },
        }
    }

    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, AgentError> {
        match operation {
            ANALYZE_NUMBERS_OPERATION => {
                let input: StatisticsInput = serde_json::from_value(payload).map_err(|e| {
                    AgentError::permanent(
                        "INVALID_INPUT",
                        format!("invalid statistics input: {}", e),
                    )
                })?;
                let result = self.analyze_numbers(&input).await?;
                serde_json::to_value(AgentOutput::ok(result)).map_err(|e| {
                    AgentError::permanent("SERIALIZATION_ERROR", format!("{}", e))
                })
            }
            other => Err(AgentError::permanent(
                "UNKNOWN_OPERATION",
                format!("unknown operation: {}", other),
            )
            .with_attr("operation", other)),
        }
    }
}
