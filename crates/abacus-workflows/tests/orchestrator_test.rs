// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Orchestrator workflow tests against a fully wired in-memory deployment.

use std::sync::Arc;

use serde_json::json;

use abacus_agents::{CalculatorAgent, StatisticsAgent};
use abacus_sdk::{AgentClients, AgentRegistry, AgentRole, InMemoryTransport};
use abacus_workflows::{Orchestrator, OrchestratorInput};

async fn orchestrator(namespace: &str) -> Orchestrator {
    let registry = AgentRegistry::new(namespace);
    let transport = Arc::new(InMemoryTransport::new());

    let calculator_name = registry.instance_name(AgentRole::Calculator);
    transport
        .register(
            calculator_name.clone(),
            Arc::new(CalculatorAgent::new(calculator_name.clone())),
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

    Orchestrator::new(clients)
}

fn calculate_input(operation: &str, numbers: Vec<f64>) -> OrchestratorInput {
    OrchestratorInput {
        operation: "calculate".to_string(),
        numbers,
        calculation_operation: Some(operation.to_string()),
    }
}

fn analyze_input(numbers: Vec<f64>) -> OrchestratorInput {
    OrchestratorInput {
        operation: "analyze".to_string(),
        numbers,
        calculation_operation: None,
    }
}

#[tokio::test]
async fn test_run_calculate_add() {
    let orchestrator = orchestrator("run").await;
    let output = orchestrator
        .run(calculate_input("add", vec![1.0, 2.0, 3.0]))
        .await;

    assert!(output.success);
    assert!(output.error.is_none());
    let result = output.result.unwrap();
    assert_eq!(result["result"], json!(6.0));
    assert_eq!(result["operation"], json!("add"));
    assert_eq!(output.agents_used, vec!["run-calculator-agent"]);
}

#[tokio::test]
async fn test_run_analyze_tracks_indirect_agents() {
    let orchestrator = orchestrator("run").await;
    let output = orchestrator.run(analyze_input(vec![1.0, 2.0, 3.0, 4.0])).await;

    assert!(output.success);
    let result = output.result.unwrap();
    assert_eq!(result["count"], json!(4));
    assert_eq!(result["sum"], json!(10.0));
    assert_eq!(result["mean"], json!(2.5));
    assert_eq!(result["median"], json!(2.5));
    assert_eq!(result["min"], json!(1.0));
    assert_eq!(result["max"], json!(4.0));
    assert_eq!(result["range"], json!(3.0));

    // Statistics first, then the annotated indirect calculator entry.
    assert_eq!(
        output.agents_used,
        vec![
            "run-statistics-agent".to_string(),
            "run-calculator-agent (called by Statistics Agent)".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_run_unknown_operation_is_structured_failure() {
    let orchestrator = orchestrator("run").await;
    let output = orchestrator
        .run(OrchestratorInput {
            operation: "bogus".to_string(),
            numbers: vec![1.0],
            calculation_operation: None,
        })
        .await;

    assert!(!output.success);
    assert!(output.result.is_none());
    assert!(output.agents_used.is_empty());
    let error = output.error.unwrap();
    assert!(!error.is_empty());
    assert!(error.contains("unknown operation"));
}

#[tokio::test]
async fn test_run_calculate_without_operation_tag_fails() {
    let orchestrator = orchestrator("run").await;
    let output = orchestrator
        .run(OrchestratorInput {
            operation: "calculate".to_string(),
            numbers: vec![1.0, 2.0],
            calculation_operation: None,
        })
        .await;

    assert!(!output.success);
    assert!(
        output
            .error
            .unwrap()
            .contains("calculationOperation is required")
    );
}

#[tokio::test]
async fn test_run_division_by_zero_is_structured_failure() {
    let orchestrator = orchestrator("run").await;
    let output = orchestrator
        .run(calculate_input("divide", vec![4.0, 0.0]))
        .await;

    assert!(!output.success);
    assert!(output.result.is_none());
    // The calculator was invoked but never completed, so the trail is empty.
    assert!(output.agents_used.is_empty());
    assert!(output.error.unwrap().contains("division by zero"));
}

#[tokio::test]
async fn test_run_succeeds_when_discovery_degrades() {
    // Statistics is missing: discovery degrades to one card, but a
    // calculate dispatch still succeeds.
    let registry = AgentRegistry::new("deg");
    let transport = Arc::new(InMemoryTransport::new());
    let calculator_name = registry.instance_name(AgentRole::Calculator);
    transport
        .register(
            calculator_name.clone(),
            Arc::new(CalculatorAgent::new(calculator_name)),
        )
        .await;
    let orchestrator = Orchestrator::new(AgentClients::new(registry, transport));

    let output = orchestrator
        .run(calculate_input("multiply", vec![2.0, 3.0]))
        .await;

    assert!(output.success);
    assert_eq!(output.result.unwrap()["result"], json!(6.0));
}

#[tokio::test]
async fn test_run_is_idempotent() {
    let orchestrator = orchestrator("run").await;

    let a = orchestrator.run(analyze_input(vec![5.0, 1.0, 3.0])).await;
    let b = orchestrator.run(analyze_input(vec![5.0, 1.0, 3.0])).await;

    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[tokio::test]
async fn test_output_wire_format_is_camel_case() {
    let orchestrator = orchestrator("run").await;
    let output = orchestrator
        .run(calculate_input("subtract", vec![5.0, 2.0, 1.0]))
        .await;

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["success"], json!(true));
    assert!(json.get("agentsUsed").is_some());
    assert_eq!(json["result"]["result"], json!(2.0));
    // Absent error is omitted from the wire format entirely.
    assert!(json.get("error").is_none());
}
