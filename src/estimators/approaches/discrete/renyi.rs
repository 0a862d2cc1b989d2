// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{InfoError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{
    Discretise, LOG_BASE, check_same_length, checked_with_capacity, checked_zeros,
    number_of_unique_values,
};
use crate::estimators::approaches::discrete::probability::{
    JointProbabilityState, ProbabilityState, calculate_joint_probability, calculate_probability,
};
use crate::estimators::traits::{EntropyEstimator, GlobalValue, LogBase, MutualInformationEstimator};

/// Reject orders for which the Rényi family is undefined.
pub fn check_alpha(alpha: f64) -> Result<f64> {
    if !alpha.is_finite() || alpha == 1.0 {
        return Err(InfoError::InvalidAlpha(alpha));
    }
    Ok(alpha)
}

/// Σ p^α over the strictly positive entries.
fn power_sum<'a>(probabilities: impl IntoIterator<Item = &'a f64>, alpha: f64) -> f64 {
    probabilities
        .into_iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p.powf(alpha))
        .sum()
}

/// 1/(1-α) log_b Σ p^α. A state space without states has entropy 0.
fn renyi_from_table(state: &ProbabilityState, alpha: f64, base: f64) -> f64 {
    if state.num_states == 0 {
        return 0.0;
    }
    power_sum(state.probabilities.iter(), alpha).ln() / base.ln() / (1.0 - alpha)
}

/// Rényi entropy of order α, H_α(X) = 1/(1-α) log Σ p(x)^α.
///
/// Converges to the Shannon entropy as α → 1; α = 1 itself is rejected.
pub struct RenyiEntropy {
    state: ProbabilityState,
    alpha: f64,
    base: f64,
}

impl RenyiEntropy {
    pub fn new<T: Discretise>(alpha: f64, data: &Array1<T>) -> Result<Self> {
        let alpha = check_alpha(alpha)?;
        let state = calculate_probability(data)?;
        Ok(Self { state, alpha, base: LOG_BASE })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl GlobalValue for RenyiEntropy {
    fn global_value(&self) -> f64 {
        renyi_from_table(&self.state, self.alpha, self.base)
    }
}

/// Joint Rényi entropy H_α(X,Y) over the full Cartesian joint table.
pub struct JointRenyiEntropy {
    state: JointProbabilityState,
    alpha: f64,
    base: f64,
}

impl JointRenyiEntropy {
    pub fn new<A: Discretise, B: Discretise>(
        alpha: f64,
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<Self> {
        let alpha = check_alpha(alpha)?;
        let state = calculate_joint_probability(first, second)?;
        Ok(Self { state, alpha, base: LOG_BASE })
    }
}

impl GlobalValue for JointRenyiEntropy {
    fn global_value(&self) -> f64 {
        if self.state.num_joint_states == 0 {
            return 0.0;
        }
        power_sum(self.state.joint_probabilities.iter(), self.alpha).ln()
            / self.base.ln()
            / (1.0 - self.alpha)
    }
}

/// Sum of per-partition Rényi entropies of X, one partition per value of Y.
///
/// The samples of X are split by the value of the conditioning variable and the
/// unconditional Rényi entropy of every partition is added up. The partitions are
/// **not** weighted by p(y), so this is not the probability-weighted generalisation of
/// the Shannon conditional entropy.
pub struct ConditionalRenyiEntropy {
    partitions: Vec<ProbabilityState>,
    alpha: f64,
    base: f64,
}

impl ConditionalRenyiEntropy {
    /// Partition by the distinct values of `condition`, found by first-seen relabelling.
    pub fn new<A: Discretise, B: Discretise>(
        alpha: f64,
        data: &Array1<A>,
        condition: &Array1<B>,
    ) -> Result<Self> {
        check_same_length(&[data.len(), condition.len()])?;
        let labels = number_of_unique_values(condition)?;
        Self::with_states(alpha, data, &labels.codes, labels.num_states)
    }

    /// Partition by precomputed 1-based condition codes in `1..=num_states`.
    ///
    /// Codes produced by `merge_arrays` or `number_of_unique_values` can be passed
    /// directly.
    pub fn with_states<A: Discretise>(
        alpha: f64,
        data: &Array1<A>,
        condition_codes: &Array1<usize>,
        num_states: usize,
    ) -> Result<Self> {
        let alpha = check_alpha(alpha)?;
        check_same_length(&[data.len(), condition_codes.len()])?;

        let mut sizes = checked_zeros::<usize>(num_states)?;
        for &code in condition_codes.iter() {
            let slot = code
                .checked_sub(1)
                .filter(|&s| s < num_states)
                .ok_or(InfoError::InvalidConditionCode { code, num_states })?;
            sizes[slot] += 1;
        }

        let mut buckets = checked_with_capacity::<Vec<A>>(num_states)?;
        for &size in &sizes {
            buckets.push(checked_with_capacity(size)?);
        }
        for (&v, &code) in data.iter().zip(condition_codes.iter()) {
            buckets[code - 1].push(v);
        }

        tracing::debug!(num_partitions = num_states, "conditional Rényi entropy partitioned");

        let mut partitions = checked_with_capacity(num_states)?;
        for bucket in buckets {
            partitions.push(calculate_probability(&Array1::from(bucket))?);
        }
        Ok(Self { partitions, alpha, base: LOG_BASE })
    }

    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }
}

impl GlobalValue for ConditionalRenyiEntropy {
    fn global_value(&self) -> f64 {
        self.partitions
            .iter()
            .map(|state| renyi_from_table(state, self.alpha, self.base))
            .sum()
    }
}

/// Rényi α-divergence between p(x,y) and p(x)p(y),
/// D_α = 1/(α-1) log Σ p(x,y)^α (p(x)p(y))^(1-α).
///
/// Only jointly positive states contribute.
pub struct RenyiMutualInformation {
    state: JointProbabilityState,
    alpha: f64,
    base: f64,
}

impl RenyiMutualInformation {
    pub fn new<A: Discretise, B: Discretise>(
        alpha: f64,
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<Self> {
        let alpha = check_alpha(alpha)?;
        let state = calculate_joint_probability(first, second)?;
        Ok(Self { state, alpha, base: LOG_BASE })
    }
}

impl GlobalValue for RenyiMutualInformation {
    fn global_value(&self) -> f64 {
        let state = &self.state;
        if state.num_joint_states == 0 {
            return 0.0;
        }
        let complement = 1.0 - self.alpha;
        let mut sum = 0.0_f64;
        for (i, &joint) in state.joint_probabilities.iter().enumerate() {
            let p_first = state.first_probabilities[state.first_index(i)];
            let p_second = state.second_probabilities[state.second_index(i)];
            if joint > 0.0 && p_first > 0.0 && p_second > 0.0 {
                sum += joint.powf(self.alpha) * (p_first * p_second).powf(complement);
            }
        }
        sum.ln() / self.base.ln() / (self.alpha - 1.0)
    }
}

/// Rényi mutual information as an entropy difference, H_α(X) + H_α(Y) - H_α(X,Y).
pub struct RenyiJointMutualInformation {
    first: RenyiEntropy,
    second: RenyiEntropy,
    joint: JointRenyiEntropy,
}

impl RenyiJointMutualInformation {
    pub fn new<A: Discretise, B: Discretise>(
        alpha: f64,
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<Self> {
        let joint = JointRenyiEntropy::new(alpha, first, second)?;
        Ok(Self {
            first: RenyiEntropy::new(alpha, first)?,
            second: RenyiEntropy::new(alpha, second)?,
            joint,
        })
    }
}

impl GlobalValue for RenyiJointMutualInformation {
    fn global_value(&self) -> f64 {
        self.first.global_value() + self.second.global_value() - self.joint.global_value()
    }
}

impl LogBase for RenyiJointMutualInformation {
    fn with_base(self, base: f64) -> Self {
        Self {
            first: self.first.with_base(base),
            second: self.second.with_base(base),
            joint: self.joint.with_base(base),
        }
    }

    fn base(&self) -> f64 {
        self.joint.base()
    }
}

super::impl_log_base!(
    RenyiEntropy,
    JointRenyiEntropy,
    ConditionalRenyiEntropy,
    RenyiMutualInformation
);

impl EntropyEstimator for RenyiEntropy {}
impl EntropyEstimator for JointRenyiEntropy {}
impl EntropyEstimator for ConditionalRenyiEntropy {}
impl MutualInformationEstimator for RenyiMutualInformation {}
impl MutualInformationEstimator for RenyiJointMutualInformation {}

pub fn renyi_entropy<T: Discretise>(alpha: f64, data: &Array1<T>) -> Result<f64> {
    Ok(RenyiEntropy::new(alpha, data)?.global_value())
}

pub fn joint_renyi_entropy<A: Discretise, B: Discretise>(
    alpha: f64,
    first: &Array1<A>,
    second: &Array1<B>,
) -> Result<f64> {
    Ok(JointRenyiEntropy::new(alpha, first, second)?.global_value())
}

pub fn conditional_renyi_entropy<A: Discretise, B: Discretise>(
    alpha: f64,
    data: &Array1<A>,
    condition: &Array1<B>,
) -> Result<f64> {
    Ok(ConditionalRenyiEntropy::new(alpha, data, condition)?.global_value())
}

pub fn conditional_renyi_entropy_with_states<A: Discretise>(
    alpha: f64,
    data: &Array1<A>,
    condition_codes: &Array1<usize>,
    num_states: usize,
) -> Result<f64> {
    Ok(ConditionalRenyiEntropy::with_states(alpha, data, condition_codes, num_states)?.global_value())
}

pub fn renyi_mi_divergence<A: Discretise, B: Discretise>(
    alpha: f64,
    first: &Array1<A>,
    second: &Array1<B>,
) -> Result<f64> {
    Ok(RenyiMutualInformation::new(alpha, first, second)?.global_value())
}

pub fn renyi_mi_joint<A: Discretise, B: Discretise>(
    alpha: f64,
    first: &Array1<A>,
    second: &Array1<B>,
) -> Result<f64> {
    Ok(RenyiJointMutualInformation::new(alpha, first, second)?.global_value())
}
