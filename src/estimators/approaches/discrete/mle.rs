// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::{Discretise, LOG_BASE, merge_arrays};
use crate::estimators::approaches::discrete::probability::{
    JointProbabilityState, ProbabilityState, calculate_joint_probability, calculate_probability,
};
use crate::estimators::traits::{
    ConditionalMutualInformationEstimator, EntropyEstimator, GlobalValue, LogBase,
    MutualInformationEstimator,
};

/// Shannon entropy of a single discrete variable, H(X) = -Σ p(x) log p(x).
///
/// Probabilities are plug-in (maximum likelihood) estimates n_x/N over the normalised
/// states of the input. States with zero probability do not contribute.
pub struct DiscreteEntropy {
    state: ProbabilityState,
    base: f64,
}

impl DiscreteEntropy {
    pub fn new<T: Discretise>(data: &Array1<T>) -> Result<Self> {
        let state = calculate_probability(data)?;
        Ok(Self { state, base: LOG_BASE })
    }

    pub fn probabilities(&self) -> &ProbabilityState {
        &self.state
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> f64 {
        let mut h = 0.0_f64;
        for &p in self.state.probabilities.iter() {
            if p > 0.0 {
                h -= p * p.ln();
            }
        }
        h / self.base.ln()
    }
}

/// Joint Shannon entropy H(X,Y) over the full Cartesian joint table.
pub struct DiscreteJointEntropy {
    state: JointProbabilityState,
    base: f64,
}

impl DiscreteJointEntropy {
    pub fn new<A: Discretise, B: Discretise>(first: &Array1<A>, second: &Array1<B>) -> Result<Self> {
        let state = calculate_joint_probability(first, second)?;
        Ok(Self { state, base: LOG_BASE })
    }
}

impl GlobalValue for DiscreteJointEntropy {
    fn global_value(&self) -> f64 {
        let mut h = 0.0_f64;
        for &p in self.state.joint_probabilities.iter() {
            if p > 0.0 {
                h -= p * p.ln();
            }
        }
        h / self.base.ln()
    }
}

/// Conditional entropy H(X|Y) = -Σ p(x,y) log(p(x,y) / p(y)).
pub struct DiscreteConditionalEntropy {
    state: JointProbabilityState,
    base: f64,
}

impl DiscreteConditionalEntropy {
    pub fn new<A: Discretise, B: Discretise>(data: &Array1<A>, condition: &Array1<B>) -> Result<Self> {
        let state = calculate_joint_probability(data, condition)?;
        Ok(Self { state, base: LOG_BASE })
    }
}

impl GlobalValue for DiscreteConditionalEntropy {
    fn global_value(&self) -> f64 {
        let state = &self.state;
        let mut h = 0.0_f64;
        for (i, &joint) in state.joint_probabilities.iter().enumerate() {
            let cond = state.second_probabilities[state.second_index(i)];
            if joint > 0.0 && cond > 0.0 {
                h -= joint * (joint / cond).ln();
            }
        }
        h / self.base.ln()
    }
}

/// Mutual information I(X;Y) = Σ p(x,y) log(p(x,y) / (p(x) p(y))).
///
/// The log ratio is evaluated as a difference of logarithms so that products of very
/// small marginals never underflow.
pub struct DiscreteMutualInformation {
    state: JointProbabilityState,
    base: f64,
}

impl DiscreteMutualInformation {
    pub fn new<A: Discretise, B: Discretise>(first: &Array1<A>, second: &Array1<B>) -> Result<Self> {
        let state = calculate_joint_probability(first, second)?;
        Ok(Self { state, base: LOG_BASE })
    }
}

impl GlobalValue for DiscreteMutualInformation {
    fn global_value(&self) -> f64 {
        let state = &self.state;
        let mut mi = 0.0_f64;
        for (i, &joint) in state.joint_probabilities.iter().enumerate() {
            let p_first = state.first_probabilities[state.first_index(i)];
            let p_second = state.second_probabilities[state.second_index(i)];
            if joint > 0.0 && p_first > 0.0 && p_second > 0.0 {
                mi += joint * (joint.ln() - p_first.ln() - p_second.ln());
            }
        }
        mi / self.base.ln()
    }
}

/// Conditional mutual information I(X;Y|Z) = H(X|Z) - H(X|Y,Z).
///
/// Y and Z are merged into a single joint variable over their observed combinations
/// before the second conditional entropy is taken.
pub struct DiscreteConditionalMutualInformation {
    given_condition: DiscreteConditionalEntropy,
    given_joint: DiscreteConditionalEntropy,
}

impl DiscreteConditionalMutualInformation {
    pub fn new<A: Discretise, B: Discretise, C: Discretise>(
        data: &Array1<A>,
        target: &Array1<B>,
        condition: &Array1<C>,
    ) -> Result<Self> {
        let merged = merge_arrays(target, condition)?;
        let given_condition = DiscreteConditionalEntropy::new(data, condition)?;
        let given_joint = DiscreteConditionalEntropy::new(data, &merged.codes)?;
        Ok(Self { given_condition, given_joint })
    }
}

impl GlobalValue for DiscreteConditionalMutualInformation {
    fn global_value(&self) -> f64 {
        self.given_condition.global_value() - self.given_joint.global_value()
    }
}

impl LogBase for DiscreteConditionalMutualInformation {
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
    DiscreteEntropy,
    DiscreteJointEntropy,
    DiscreteConditionalEntropy,
    DiscreteMutualInformation
);

impl EntropyEstimator for DiscreteEntropy {}
impl EntropyEstimator for DiscreteJointEntropy {}
impl EntropyEstimator for DiscreteConditionalEntropy {}
impl MutualInformationEstimator for DiscreteMutualInformation {}
impl ConditionalMutualInformationEstimator for DiscreteConditionalMutualInformation {}

/// H(X) in bits.
pub fn entropy<T: Discretise>(data: &Array1<T>) -> Result<f64> {
    Ok(DiscreteEntropy::new(data)?.global_value())
}

/// H(X,Y) in bits.
pub fn joint_entropy<A: Discretise, B: Discretise>(first: &Array1<A>, second: &Array1<B>) -> Result<f64> {
    Ok(DiscreteJointEntropy::new(first, second)?.global_value())
}

/// H(X|Y) in bits.
pub fn conditional_entropy<A: Discretise, B: Discretise>(
    data: &Array1<A>,
    condition: &Array1<B>,
) -> Result<f64> {
    Ok(DiscreteConditionalEntropy::new(data, condition)?.global_value())
}

/// I(X;Y) in bits.
pub fn mutual_information<A: Discretise, B: Discretise>(
    first: &Array1<A>,
    second: &Array1<B>,
) -> Result<f64> {
    Ok(DiscreteMutualInformation::new(first, second)?.global_value())
}

/// I(X;Y|Z) in bits.
pub fn conditional_mutual_information<A: Discretise, B: Discretise, C: Discretise>(
    data: &Array1<A>,
    target: &Array1<B>,
    condition: &Array1<C>,
) -> Result<f64> {
    Ok(DiscreteConditionalMutualInformation::new(data, target, condition)?.global_value())
}
