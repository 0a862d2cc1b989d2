// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Estimators whose result can be reported in an arbitrary logarithm base.
///
/// All estimators default to base 2 (bits).
pub trait LogBase: Sized {
    /// Set logarithm base.
    fn with_base(self, base: f64) -> Self;

    /// Currently configured logarithm base.
    fn base(&self) -> f64;
}

/// Marker trait for entropy estimator instances.
pub trait EntropyEstimator: GlobalValue + LogBase {}

/// Marker trait for Mutual Information estimator instances.
pub trait MutualInformationEstimator: GlobalValue + LogBase {}

/// Marker trait for Conditional Mutual Information estimator instances.
pub trait ConditionalMutualInformationEstimator: GlobalValue + LogBase {}
