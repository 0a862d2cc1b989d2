// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample-weighted Shannon measures.
//!
//! Each term of the plain estimator is scaled by the mean caller-supplied weight of the
//! samples falling in that state (the joint state for two-variable measures). With all
//! weights equal to 1 every estimator here reproduces its unweighted counterpart exactly.

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::{Discretise, LOG_BASE, merge_arrays};
use crate::estimators::approaches::discrete::probability::{
    WeightedJointProbState, WeightedProbState, calculate_weighted_joint_probability,
    calculate_weighted_probability,
};
use crate::estimators::traits::{
    ConditionalMutualInformationEstimator, EntropyEstimator, GlobalValue, LogBase,
    MutualInformationEstimator,
};

/// Weighted entropy H_w(X) = -Σ w(x) p(x) log p(x).
pub struct WeightedEntropy {
    state: WeightedProbState,
    base: f64,
}

impl WeightedEntropy {
    pub fn new<T: Discretise>(data: &Array1<T>, weights: &Array1<f64>) -> Result<Self> {
        let state = calculate_weighted_probability(data, weights)?;
        Ok(Self { state, base: LOG_BASE })
    }
}

impl GlobalValue for WeightedEntropy {
    fn global_value(&self) -> f64 {
        let mut h = 0.0_f64;
        for (&p, &w) in self.state.probabilities.iter().zip(self.state.state_weights.iter()) {
            if p > 0.0 {
                h -= w * p * p.ln();
            }
        }
        h / self.base.ln()
    }
}

/// Weighted joint entropy H_w(X,Y).
pub struct WeightedJointEntropy {
    state: WeightedJointProbState,
    base: f64,
}

impl WeightedJointEntropy {
    pub fn new<A: Discretise, B: Discretise>(
        first: &Array1<A>,
        second: &Array1<B>,
        weights: &Array1<f64>,
    ) -> Result<Self> {
        let state = calculate_weighted_joint_probability(first, second, weights)?;
        Ok(Self { state, base: LOG_BASE })
    }
}

impl GlobalValue for WeightedJointEntropy {
    fn global_value(&self) -> f64 {
        let state = &self.state;
        let mut h = 0.0_f64;
        for (&p, &w) in state.joint_probabilities.iter().zip(state.joint_weights.iter()) {
            if p > 0.0 {
                h -= w * p * p.ln();
            }
        }
        h / self.base.ln()
    }
}

/// Weighted conditional entropy H_w(X|Y).
pub struct WeightedConditionalEntropy {
    state: WeightedJointProbState,
    base: f64,
}

impl WeightedConditionalEntropy {
    pub fn new<A: Discretise, B: Discretise>(
        data: &Array1<A>,
        condition: &Array1<B>,
        weights: &Array1<f64>,
    ) -> Result<Self> {
        let state = calculate_weighted_joint_probability(data, condition, weights)?;
        Ok(Self { state, base: LOG_BASE })
    }
}

impl GlobalValue for WeightedConditionalEntropy {
    fn global_value(&self) -> f64 {
        let state = &self.state;
        let mut h = 0.0_f64;
        for (i, (&joint, &w)) in state
            .joint_probabilities
            .iter()
            .zip(state.joint_weights.iter())
            .enumerate()
        {
            let cond = state.second_probabilities[state.second_index(i)];
            if joint > 0.0 && cond > 0.0 {
                h -= w * joint * (joint / cond).ln();
            }
        }
        h / self.base.ln()
    }
}

/// Weighted mutual information I_w(X;Y).
pub struct WeightedMutualInformation {
    state: WeightedJointProbState,
    base: f64,
}

impl WeightedMutualInformation {
    pub fn new<A: Discretise, B: Discretise>(
        first: &Array1<A>,
        second: &Array1<B>,
        weights: &Array1<f64>,
    ) -> Result<Self> {
        let state = calculate_weighted_joint_probability(first, second, weights)?;
        Ok(Self { state, base: LOG_BASE })
    }
}

impl GlobalValue for WeightedMutualInformation {
    fn global_value(&self) -> f64 {
        let state = &self.state;
        let mut mi = 0.0_f64;
        for (i, (&joint, &w)) in state
            .joint_probabilities
            .iter()
            .zip(state.joint_weights.iter())
            .enumerate()
        {
            let p_first = state.first_probabilities[state.first_index(i)];
            let p_second = state.second_probabilities[state.second_index(i)];
            if joint > 0.0 && p_first > 0.0 && p_second > 0.0 {
                mi += w * joint * (joint.ln() - p_first.ln() - p_second.ln());
            }
        }
        mi / self.base.ln()
    }
}

/// Weighted conditional mutual information I_w(X;Y|Z) = H_w(X|Z) - H_w(X|Y,Z).
pub struct WeightedConditionalMutualInformation {
    given_condition: WeightedConditionalEntropy,
    given_joint: WeightedConditionalEntropy,
}

impl WeightedConditionalMutualInformation {
    pub fn new<A: Discretise, B: Discretise, C: Discretise>(
        data: &Array1<A>,
        target: &Array1<B>,
        condition: &Array1<C>,
        weights: &Array1<f64>,
    ) -> Result<Self> {
        let merged = merge_arrays(target, condition)?;
        let given_condition = WeightedConditionalEntropy::new(data, condition, weights)?;
        let given_joint = WeightedConditionalEntropy::new(data, &merged.codes, weights)?;
        Ok(Self { given_condition, given_joint })
    }
}

impl GlobalValue for WeightedConditionalMutualInformation {
    fn global_value(&self) -> f64 {
        self.given_condition.global_value() - self.given_joint.global_value()
    }
}

impl LogBase for WeightedConditionalMutualInformation {
    fn with_base(self, base: f64) -> Self {
        Self {
            given_condition: self.given_condition.with_base(base),
            given_joint: self.given_joint.with_base(base),
        }
    }

    fn base(&self) -> f64 {
        self.given_condition.base()
    }
}

super::impl_log_base!(
    WeightedEntropy,
    WeightedJointEntropy,
    WeightedConditionalEntropy,
    WeightedMutualInformation
);

impl EntropyEstimator for WeightedEntropy {}
impl EntropyEstimator for WeightedJointEntropy {}
impl EntropyEstimator for WeightedConditionalEntropy {}
impl MutualInformationEstimator for WeightedMutualInformation {}
impl ConditionalMutualInformationEstimator for WeightedConditionalMutualInformation {}

pub fn weighted_entropy<T: Discretise>(data: &Array1<T>, weights: &Array1<f64>) -> Result<f64> {
    Ok(WeightedEntropy::new(data, weights)?.global_value())
}

pub fn weighted_joint_entropy<A: Discretise, B: Discretise>(
    first: &Array1<A>,
    second: &Array1<B>,
    weights: &Array1<f64>,
) -> Result<f64> {
    Ok(WeightedJointEntropy::new(first, second, weights)?.global_value())
}

pub fn weighted_conditional_entropy<A: Discretise, B: Discretise>(
    data: &Array1<A>,
    condition: &Array1<B>,
    weights: &Array1<f64>,
) -> Result<f64> {
    Ok(WeightedConditionalEntropy::new(data, condition, weights)?.global_value())
}

pub fn weighted_mutual_information<A: Discretise, B: Discretise>(
    first: &Array1<A>,
    second: &Array1<B>,
    weights: &Array1<f64>,
) -> Result<f64> {
    Ok(WeightedMutualInformation::new(first, second, weights)?.global_value())
}

pub fn weighted_conditional_mutual_information<A: Discretise, B: Discretise, C: Discretise>(
    data: &Array1<A>,
    target: &Array1<B>,
    condition: &Array1<C>,
    weights: &Array1<f64>,
) -> Result<f64> {
    Ok(WeightedConditionalMutualInformation::new(data, target, condition, weights)?.global_value())
}
