// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Leaf agents for abacus orchestrations.
//!
//! Two stateless request handlers:
//! - [`CalculatorAgent`] - left-to-right fold arithmetic over number
//!   sequences
//! - [`StatisticsAgent`] - statistical measures, composing the calculator
//!   through an injected client rather than duplicating arithmetic
//!
//! Each agent implements [`abacus_sdk::AgentService`], exposing a
//! hand-authored capability card and one domain operation.

mod calculator;
mod statistics;

pub use calculator::{
    CALCULATE_OPERATION, CalculationInput, CalculationOperation, CalculationResult,
    CalculatorAgent,
};
pub use statistics::{
    ANALYZE_NUMBERS_OPERATION, StatisticsAgent, StatisticsInput, StatisticsResult,
};
