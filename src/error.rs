// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::TryReserveError;
use thiserror::Error;

/// Error types for probability-table construction and the measures built on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InfoError {
    #[error("input vectors have different lengths: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("declared arity {declared} is smaller than the {observed} observed states")]
    ArityExceeded { declared: usize, observed: usize },

    #[error("Rényi order alpha must be finite and different from 1 (got {0})")]
    InvalidAlpha(f64),

    #[error("condition code {code} lies outside 1..={num_states}")]
    InvalidConditionCode { code: usize, num_states: usize },

    #[error("state space is too large to be indexed")]
    StateSpaceOverflow,

    #[error("at least one variable is required")]
    NoVariables,

    #[error("failed to allocate {requested} elements")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, InfoError>;
