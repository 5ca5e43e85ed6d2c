// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shared types for the abacus multi-agent demo.
//!
//! Every agent in the system speaks the same small vocabulary:
//! - [`AgentCard`] - the self-description returned by an agent's card probe
//! - [`AgentOutput`] - the envelope wrapping every successful operation result
//! - [`AgentError`] - structured failure with transient/permanent classification
//!
//! Cards and envelopes are transient response values: they are recomputed
//! per request and never persisted.

mod card;
mod error;

pub use card::{AgentCard, AgentOutput, InputSchema, OutputSchema};
pub use error::{AgentError, ErrorCategory, ErrorSeverity};
