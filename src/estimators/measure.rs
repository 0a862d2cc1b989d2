// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-style dispatch over every supported measure.
//!
//! Bindings that receive "which measure" as data build a [`Measure`] and call
//! [`Measure::compute`], or [`Measure::compute_or_sentinel`] when the host expects the
//! toolbox convention of `-1.0` for rejected input.

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::{mle, renyi, weighted};

/// Value reported by [`Measure::compute_or_sentinel`] when a computation is rejected.
pub const ERROR_SENTINEL: f64 = -1.0;

/// One information measure together with its inputs.
#[derive(Debug, Clone, Copy)]
pub enum Measure<'a> {
    Entropy { data: &'a Array1<f64> },
    JointEntropy { first: &'a Array1<f64>, second: &'a Array1<f64> },
    ConditionalEntropy { data: &'a Array1<f64>, condition: &'a Array1<f64> },
    MutualInformation { first: &'a Array1<f64>, second: &'a Array1<f64> },
    ConditionalMutualInformation {
        data: &'a Array1<f64>,
        target: &'a Array1<f64>,
        condition: &'a Array1<f64>,
    },
    WeightedEntropy { data: &'a Array1<f64>, weights: &'a Array1<f64> },
    WeightedJointEntropy {
        first: &'a Array1<f64>,
        second: &'a Array1<f64>,
        weights: &'a Array1<f64>,
    },
    WeightedConditionalEntropy {
        data: &'a Array1<f64>,
        condition: &'a Array1<f64>,
        weights: &'a Array1<f64>,
    },
    WeightedMutualInformation {
        first: &'a Array1<f64>,
        second: &'a Array1<f64>,
        weights: &'a Array1<f64>,
    },
    WeightedConditionalMutualInformation {
        data: &'a Array1<f64>,
        target: &'a Array1<f64>,
        condition: &'a Array1<f64>,
        weights: &'a Array1<f64>,
    },
    RenyiEntropy { alpha: f64, data: &'a Array1<f64> },
    JointRenyiEntropy { alpha: f64, first: &'a Array1<f64>, second: &'a Array1<f64> },
    ConditionalRenyiEntropy { alpha: f64, data: &'a Array1<f64>, condition: &'a Array1<f64> },
    RenyiMutualInformation { alpha: f64, first: &'a Array1<f64>, second: &'a Array1<f64> },
    RenyiJointMutualInformation { alpha: f64, first: &'a Array1<f64>, second: &'a Array1<f64> },
}

impl Measure<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Entropy { .. } => "H(X)",
            Measure::JointEntropy { .. } => "H(X,Y)",
            Measure::ConditionalEntropy { .. } => "H(X|Y)",
            Measure::MutualInformation { .. } => "I(X;Y)",
            Measure::ConditionalMutualInformation { .. } => "I(X;Y|Z)",
            Measure::WeightedEntropy { .. } => "H_w(X)",
            Measure::WeightedJointEntropy { .. } => "H_w(X,Y)",
            Measure::WeightedConditionalEntropy { .. } => "H_w(X|Y)",
            Measure::WeightedMutualInformation { .. } => "I_w(X;Y)",
            Measure::WeightedConditionalMutualInformation { .. } => "I_w(X;Y|Z)",
            Measure::RenyiEntropy { .. } => "H_alpha(X)",
            Measure::JointRenyiEntropy { .. } => "H_alpha(X,Y)",
            Measure::ConditionalRenyiEntropy { .. } => "H_alpha(X|Y)",
            Measure::RenyiMutualInformation { .. } => "D_alpha(p(x,y)||p(x)p(y))",
            Measure::RenyiJointMutualInformation { .. } => "I_alpha(X;Y)",
        }
    }

    /// Number of samples in the primary input vector.
    pub fn num_samples(&self) -> usize {
        match *self {
            Measure::Entropy { data }
            | Measure::ConditionalEntropy { data, .. }
            | Measure::ConditionalMutualInformation { data, .. }
            | Measure::WeightedEntropy { data, .. }
            | Measure::WeightedConditionalEntropy { data, .. }
            | Measure::WeightedConditionalMutualInformation { data, .. }
            | Measure::RenyiEntropy { data, .. }
            | Measure::ConditionalRenyiEntropy { data, .. } => data.len(),
            Measure::JointEntropy { first, .. }
            | Measure::MutualInformation { first, .. }
            | Measure::WeightedJointEntropy { first, .. }
            | Measure::WeightedMutualInformation { first, .. }
            | Measure::JointRenyiEntropy { first, .. }
            | Measure::RenyiMutualInformation { first, .. }
            | Measure::RenyiJointMutualInformation { first, .. } => first.len(),
        }
    }

    /// Compute the measure in bits.
    pub fn compute(&self) -> Result<f64> {
        tracing::debug!(measure = self.name(), samples = self.num_samples(), "computing measure");
        match *self {
            Measure::Entropy { data } => mle::entropy(data),
            Measure::JointEntropy { first, second } => mle::joint_entropy(first, second),
            Measure::ConditionalEntropy { data, condition } => mle::conditional_entropy(data, condition),
            Measure::MutualInformation { first, second } => mle::mutual_information(first, second),
            Measure::ConditionalMutualInformation { data, target, condition } => {
                mle::conditional_mutual_information(data, target, condition)
            }
            Measure::WeightedEntropy { data, weights } => weighted::weighted_entropy(data, weights),
            Measure::WeightedJointEntropy { first, second, weights } => {
                weighted::weighted_joint_entropy(first, second, weights)
            }
            Measure::WeightedConditionalEntropy { data, condition, weights } => {
                weighted::weighted_conditional_entropy(data, condition, weights)
            }
            Measure::WeightedMutualInformation { first, second, weights } => {
                weighted::weighted_mutual_information(first, second, weights)
            }
            Measure::WeightedConditionalMutualInformation { data, target, condition, weights } => {
                weighted::weighted_conditional_mutual_information(data, target, condition, weights)
            }
            Measure::RenyiEntropy { alpha, data } => renyi::renyi_entropy(alpha, data),
            Measure::JointRenyiEntropy { alpha, first, second } => {
                renyi::joint_renyi_entropy(alpha, first, second)
            }
            Measure::ConditionalRenyiEntropy { alpha, data, condition } => {
                renyi::conditional_renyi_entropy(alpha, data, condition)
            }
            Measure::RenyiMutualInformation { alpha, first, second } => {
                renyi::renyi_mi_divergence(alpha, first, second)
            }
            Measure::RenyiJointMutualInformation { alpha, first, second } => {
                renyi::renyi_mi_joint(alpha, first, second)
            }
        }
    }

    /// Compute the measure, reporting [`ERROR_SENTINEL`] instead of an error.
    pub fn compute_or_sentinel(&self) -> f64 {
        match self.compute() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(measure = self.name(), error = %err, "measure rejected its input");
                ERROR_SENTINEL
            }
        }
    }
}
