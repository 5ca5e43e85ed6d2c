// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tests for the keyed client and in-memory transport.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use abacus_sdk::{
    AgentClients, AgentRegistry, AgentRole, AgentService, AgentTarget, ClientError,
    DEFAULT_INSTANCE_KEY, InMemoryTransport,
};
use abacus_types::{AgentCard, AgentError, InputSchema, OutputSchema};

/// Echoes its payload back, annotated with the operation it arrived on.
/// Holds no cross-call state.
struct EchoService {
    name: String,
}

impl EchoService {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl AgentService for EchoService {
    fn card(&self) -> AgentCard {
        AgentCard {
            name: self.name.clone(),
            description: "Echoes request payloads".to_string(),
            capabilities: vec!["Echo a payload".to_string()],
            input_schema: InputSchema {
                description: "Any JSON value".to_string(),
                required_fields: vec![],
                optional_fields: vec![],
            },
            output_schema: OutputSchema {
                description: "The payload and the operation it arrived on".to_string(),
                fields: vec!["operation".to_string(), "payload".to_string()],
            },
        }
    }

    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, AgentError> {
        match operation {
            "echo" => Ok(json!({ "operation": operation, "payload": payload })),
            other => Err(AgentError::permanent(
                "UNKNOWN_OPERATION",
                format!("unknown operation: {}", other),
            )),
        }
    }
}

/// Fails every invocation, including domain operations.
struct BrokenService;

#[async_trait]
impl AgentService for BrokenService {
    fn card(&self) -> AgentCard {
        AgentCard {
            name: "broken".to_string(),
            description: "Always fails".to_string(),
            capabilities: vec![],
            input_schema: InputSchema {
                description: String::new(),
                required_fields: vec![],
                optional_fields: vec![],
            },
            output_schema: OutputSchema {
                description: String::new(),
                fields: vec![],
            },
        }
    }

    async fn invoke(&self, _operation: &str, _payload: Value) -> Result<Value, AgentError> {
        Err(AgentError::transient("TIMEOUT", "simulated timeout"))
    }
}

async fn wired_clients() -> AgentClients {
    let registry = AgentRegistry::new("test");
    let transport = InMemoryTransport::new();
    transport
        .register(
            registry.instance_name(AgentRole::Calculator),
            Arc::new(EchoService::new("test-calculator-agent")),
        )
        .await;
    AgentClients::new(registry, Arc::new(transport))
}

#[derive(Debug, Serialize)]
struct EchoRequest {
    message: String,
}

#[derive(Debug, Deserialize)]
struct EchoResponse {
    operation: String,
    payload: Value,
}

#[tokio::test]
async fn test_typed_call_round_trip() {
    let clients = wired_clients().await;
    let client = clients.default_client(AgentRole::Calculator);

    let response: EchoResponse = client
        .call(
            "echo",
            &EchoRequest {
                message: "hello".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(response.operation, "echo");
    assert_eq!(response.payload, json!({ "message": "hello" }));
}

#[tokio::test]
async fn test_get_card() {
    let clients = wired_clients().await;
    let card = clients
        .default_client(AgentRole::Calculator)
        .get_card()
        .await
        .unwrap();

    assert_eq!(card.name, "test-calculator-agent");
    assert!(card.has_disjoint_input_fields());
}

#[tokio::test]
async fn test_unknown_target() {
    let clients = wired_clients().await;
    // Statistics was never registered on the transport.
    let err = clients
        .default_client(AgentRole::Statistics)
        .get_card()
        .await
        .unwrap_err();

    match err {
        ClientError::UnknownTarget(name) => assert_eq!(name, "test-statistics-agent"),
        other => panic!("expected UnknownTarget, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remote_agent_error_preserves_classification() {
    let registry = AgentRegistry::new("test");
    let transport = InMemoryTransport::new();
    transport
        .register(
            registry.instance_name(AgentRole::Statistics),
            Arc::new(BrokenService),
        )
        .await;
    let clients = AgentClients::new(registry, Arc::new(transport));

    let err = clients
        .default_client(AgentRole::Statistics)
        .call::<_, Value>("anything", &json!({}))
        .await
        .unwrap_err();

    match err {
        ClientError::Agent(agent_err) => {
            assert_eq!(agent_err.code, "TIMEOUT");
            assert!(agent_err.should_retry());
        }
        other => panic!("expected Agent error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_card_probe_succeeds_even_when_operations_fail() {
    let registry = AgentRegistry::new("test");
    let transport = InMemoryTransport::new();
    transport
        .register(
            registry.instance_name(AgentRole::Statistics),
            Arc::new(BrokenService),
        )
        .await;
    let clients = AgentClients::new(registry, Arc::new(transport));

    // The card is a literal; the probe does not touch invoke().
    let card = clients
        .default_client(AgentRole::Statistics)
        .get_card()
        .await
        .unwrap();
    assert_eq!(card.name, "broken");
}

#[tokio::test]
async fn test_instance_key_addressing() {
    let clients = wired_clients().await;

    let default_client = clients.default_client(AgentRole::Calculator);
    assert_eq!(default_client.target().key, DEFAULT_INSTANCE_KEY);

    // Arbitrary keys address the same logical instance in-memory but are
    // carried on every call.
    let keyed = clients.client(AgentRole::Calculator, "tenant-42");
    assert_eq!(
        keyed.target(),
        &AgentTarget::new("test-calculator-agent", "tenant-42")
    );
    let response: EchoResponse = keyed
        .call(
            "echo",
            &EchoRequest {
                message: "keyed".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.operation, "echo");
}

#[tokio::test]
async fn test_unknown_operation_surfaces_as_agent_error() {
    let clients = wired_clients().await;

    let err = clients
        .default_client(AgentRole::Calculator)
        .call::<_, Value>("not-an-operation", &json!({}))
        .await
        .unwrap_err();

    match err {
        ClientError::Agent(agent_err) => {
            assert_eq!(agent_err.code, "UNKNOWN_OPERATION");
            assert!(!agent_err.should_retry());
        }
        other => panic!("expected Agent error, got {:?}", other),
    }
}
