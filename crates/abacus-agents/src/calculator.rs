// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Calculator agent: fold arithmetic over number sequences.
//!
//! Operations fold left-to-right over the input. `add` and `multiply` seed
//! with their identity (0 and 1); `subtract` and `divide` seed with the
//! first element, so a singleton input returns that element unchanged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use tracing::info;

use abacus_sdk::AgentService;
use abacus_types::{AgentCard, AgentError, AgentOutput, InputSchema, OutputSchema};

/// Operation id of the calculator's single domain operation.
pub const CALCULATE_OPERATION: &str = "calculate";

/// Arithmetic operations the calculator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CalculationOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Request payload for [`CALCULATE_OPERATION`].
///
/// The operation tag stays a string on the wire and is parsed at the point
/// of use, so an unknown tag surfaces as the `UNKNOWN_OPERATION` domain
/// error rather than a deserialization fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Operation tag: one of `add`, `subtract`, `multiply`, `divide`
    pub operation: String,

    /// Numbers to operate on, folded first-to-last
    pub numbers: Vec<f64>,
}

/// Result payload: the folded value plus the request echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The folded value
    pub result: f64,

    /// The operation that produced it
    pub operation: String,

    /// The input sequence, echoed for traceability
    pub input: Vec<f64>,
}

/// Stateless arithmetic agent.
pub struct CalculatorAgent {
    instance_name: String,
}

impl CalculatorAgent {
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
        }
    }

    /// Perform one calculation.
    ///
    /// Fails with `EMPTY_INPUT` on an empty sequence, `UNKNOWN_OPERATION`
    /// on an unrecognized tag, and `DIVISION_BY_ZERO` the instant any
    /// divisor (any element after the first) is exactly zero. A leading
    /// zero dividend with nonzero divisors is legal and yields zero. All
    /// failures are terminal.
    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, AgentError> {
        info!(
            agent = %self.instance_name,
            operation = %input.operation,
            count = input.numbers.len(),
            "performing calculation"
        );

        let Some((&first, rest)) = input.numbers.split_first() else {
            return Err(AgentError::permanent(
                "EMPTY_INPUT",
                "no numbers provided for calculation",
            ));
        };

        let operation: CalculationOperation = input.operation.parse().map_err(|_| {
            AgentError::permanent(
                "UNKNOWN_OPERATION",
                format!("unknown operation: {}", input.operation),
            )
            .with_attr("operation", &input.operation)
        })?;

        let result = match operation {
            CalculationOperation::Add => input.numbers.iter().fold(0.0, |sum, n| sum + n),
            CalculationOperation::Subtract => rest.iter().fold(first, |diff, n| diff - n),
            CalculationOperation::Multiply => {
                input.numbers.iter().fold(1.0, |product, n| product * n)
            }
            CalculationOperation::Divide => {
                let mut quotient = first;
                for &divisor in rest {
                    if divisor == 0.0 {
                        return Err(AgentError::permanent("DIVISION_BY_ZERO", "division by zero"));
                    }
                    quotient /= divisor;
                }
                quotient
            }
        };

        info!(agent = %self.instance_name, operation = %operation, result, "calculation complete");

        Ok(CalculationResult {
            result,
            operation: input.operation.clone(),
            input: input.numbers.clone(),
        })
    }
}

#[async_trait]
impl AgentService for CalculatorAgent {
    fn card(&self) -> AgentCard {
        AgentCard {
            name: self.instance_name.clone(),
            description: "Performs basic arithmetic operations on numbers".to_string(),
            capabilities: vec![
                "Add multiple numbers together".to_string(),
                "Subtract numbers sequentially".to_string(),
                "Multiply multiple numbers together".to_string(),
                "Divide numbers sequentially".to_string(),
            ],
            input_schema: InputSchema {
                description: "Operation type and array of numbers to perform operation on"
                    .to_string(),
                required_fields: vec!["operation".to_string(), "numbers".to_string()],
                optional_fields: vec![],
            },
            output_schema: OutputSchema {
                description: "Result of the calculation with operation details".to_string(),
                fields: vec![
                    "result".to_string(),
                    "operation".to_string(),
                    "input".to_string(),
                ],
            },
        }
    }

    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, AgentError> {
        match operation {
            CALCULATE_OPERATION => {
                let input: CalculationInput = serde_json::from_value(payload).map_err(|e| {
                    AgentError::permanent(
                        "INVALID_INPUT",
                        format!("invalid calculation input: {}", e),
                    )
                })?;
                let result = self.calculate(&input)?;
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
