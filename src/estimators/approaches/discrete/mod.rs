// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups all discrete-related submodules
// and exposes them to the parent approaches module.

/// Implements `LogBase` for estimators that store their base in a `base` field.
macro_rules! impl_log_base {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::estimators::traits::LogBase for $t {
                fn with_base(mut self, base: f64) -> Self {
                    self.base = base;
                    self
                }

                fn base(&self) -> f64 {
                    self.base
                }
            }
        )*
    };
}
pub(crate) use impl_log_base;

pub mod discrete_utils;
pub mod probability;

pub mod mle;
pub mod renyi;
pub mod weighted;
