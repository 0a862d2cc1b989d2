// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Empirical probability tables over normalised states.
//!
//! All tables are built by counting occurrences with integer counters and dividing
//! once per state afterwards, so the floating-point work grows with the number of
//! states rather than with the number of samples. Joint tables always span the full
//! Cartesian product of the two state spaces, with index `second * num_first + first`;
//! unobserved combinations have probability exactly 0.

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::{
    Discretise, check_same_length, checked_zeros, joint_state_count, normalise,
};

/// Probability of each state of a single variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityState {
    pub probabilities: Array1<f64>,
    pub num_states: usize,
}

/// Marginal and joint probability tables of two variables.
#[derive(Debug, Clone, PartialEq)]
pub struct JointProbabilityState {
    pub joint_probabilities: Array1<f64>,
    pub num_joint_states: usize,
    pub first_probabilities: Array1<f64>,
    pub num_first_states: usize,
    pub second_probabilities: Array1<f64>,
    pub num_second_states: usize,
}

/// Probability and mean sample weight of each state of a single variable.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedProbState {
    pub probabilities: Array1<f64>,
    pub state_weights: Array1<f64>,
    pub num_states: usize,
}

/// Weighted counterpart of [`JointProbabilityState`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedJointProbState {
    pub joint_probabilities: Array1<f64>,
    pub joint_weights: Array1<f64>,
    pub num_joint_states: usize,
    pub first_probabilities: Array1<f64>,
    pub first_weights: Array1<f64>,
    pub num_first_states: usize,
    pub second_probabilities: Array1<f64>,
    pub second_weights: Array1<f64>,
    pub num_second_states: usize,
}

impl JointProbabilityState {
    /// State of the first variable encoded in joint index `i`.
    #[inline]
    pub fn first_index(&self, i: usize) -> usize {
        i % self.num_first_states
    }

    /// State of the second variable encoded in joint index `i`.
    #[inline]
    pub fn second_index(&self, i: usize) -> usize {
        i / self.num_first_states
    }
}

impl WeightedJointProbState {
    #[inline]
    pub fn first_index(&self, i: usize) -> usize {
        i % self.num_first_states
    }

    #[inline]
    pub fn second_index(&self, i: usize) -> usize {
        i / self.num_first_states
    }
}

/// Estimate the probability of each state of `data`.
pub fn calculate_probability<T: Discretise>(data: &Array1<T>) -> Result<ProbabilityState> {
    let states = normalise(data)?;
    let mut counts = checked_zeros::<usize>(states.num_states)?;
    for &code in states.codes.iter() {
        counts[code] += 1;
    }

    let probabilities = counts_to_probabilities(&counts, data.len())?;
    Ok(ProbabilityState { probabilities, num_states: states.num_states })
}

/// Estimate marginal and joint state probabilities of two aligned variables.
pub fn calculate_joint_probability<A: Discretise, B: Discretise>(
    first: &Array1<A>,
    second: &Array1<B>,
) -> Result<JointProbabilityState> {
    let len = check_same_length(&[first.len(), second.len()])?;
    let first_states = normalise(first)?;
    let second_states = normalise(second)?;
    let num_first_states = first_states.num_states;
    let num_second_states = second_states.num_states;
    let num_joint_states = joint_state_count(num_first_states, num_second_states)?;

    let mut first_counts = checked_zeros::<usize>(num_first_states)?;
    let mut second_counts = checked_zeros::<usize>(num_second_states)?;
    let mut joint_counts = checked_zeros::<usize>(num_joint_states)?;

    for (&a, &b) in first_states.codes.iter().zip(second_states.codes.iter()) {
        first_counts[a] += 1;
        second_counts[b] += 1;
        joint_counts[b * num_first_states + a] += 1;
    }

    Ok(JointProbabilityState {
        joint_probabilities: counts_to_probabilities(&joint_counts, len)?,
        num_joint_states,
        first_probabilities: counts_to_probabilities(&first_counts, len)?,
        num_first_states,
        second_probabilities: counts_to_probabilities(&second_counts, len)?,
        num_second_states,
    })
}

/// Estimate state probabilities of `data` together with the mean weight per state.
///
/// States without samples keep probability and weight 0.
pub fn calculate_weighted_probability<T: Discretise>(
    data: &Array1<T>,
    weights: &Array1<f64>,
) -> Result<WeightedProbState> {
    let len = check_same_length(&[data.len(), weights.len()])?;
    let states = normalise(data)?;

    let mut counts = checked_zeros::<usize>(states.num_states)?;
    let mut weight_sums = checked_zeros::<f64>(states.num_states)?;
    for (&code, &w) in states.codes.iter().zip(weights.iter()) {
        counts[code] += 1;
        weight_sums[code] += w;
    }

    let (probabilities, state_weights) = weighted_tables(&counts, weight_sums, len)?;
    Ok(WeightedProbState { probabilities, state_weights, num_states: states.num_states })
}

/// Weighted counterpart of [`calculate_joint_probability`].
pub fn calculate_weighted_joint_probability<A: Discretise, B: Discretise>(
    first: &Array1<A>,
    second: &Array1<B>,
    weights: &Array1<f64>,
) -> Result<WeightedJointProbState> {
    let len = check_same_length(&[first.len(), second.len(), weights.len()])?;
    let first_states = normalise(first)?;
    let second_states = normalise(second)?;
    let num_first_states = first_states.num_states;
    let num_second_states = second_states.num_states;
    let num_joint_states = joint_state_count(num_first_states, num_second_states)?;

    let mut first_counts = checked_zeros::<usize>(num_first_states)?;
    let mut second_counts = checked_zeros::<usize>(num_second_states)?;
    let mut joint_counts = checked_zeros::<usize>(num_joint_states)?;
    let mut first_weight_sums = checked_zeros::<f64>(num_first_states)?;
    let mut second_weight_sums = checked_zeros::<f64>(num_second_states)?;
    let mut joint_weight_sums = checked_zeros::<f64>(num_joint_states)?;

    for ((&a, &b), &w) in first_states
        .codes
        .iter()
        .zip(second_states.codes.iter())
        .zip(weights.iter())
    {
        let joint = b * num_first_states + a;
        first_counts[a] += 1;
        second_counts[b] += 1;
        joint_counts[joint] += 1;
        first_weight_sums[a] += w;
        second_weight_sums[b] += w;
        joint_weight_sums[joint] += w;
    }

    let (first_probabilities, first_weights) = weighted_tables(&first_counts, first_weight_sums, len)?;
    let (second_probabilities, second_weights) =
        weighted_tables(&second_counts, second_weight_sums, len)?;
    let (joint_probabilities, joint_weights) = weighted_tables(&joint_counts, joint_weight_sums, len)?;

    Ok(WeightedJointProbState {
        joint_probabilities,
        joint_weights,
        num_joint_states,
        first_probabilities,
        first_weights,
        num_first_states,
        second_probabilities,
        second_weights,
        num_second_states,
    })
}

fn counts_to_probabilities(counts: &[usize], length: usize) -> Result<Array1<f64>> {
    let length = length as f64;
    let mut probabilities = checked_zeros::<f64>(counts.len())?;
    for (p, &count) in probabilities.iter_mut().zip(counts) {
        *p = count as f64 / length;
    }
    Ok(Array1::from(probabilities))
}

/// Turn counts into probabilities and weight sums into per-state mean weights.
fn weighted_tables(
    counts: &[usize],
    mut weight_sums: Vec<f64>,
    length: usize,
) -> Result<(Array1<f64>, Array1<f64>)> {
    let length_f = length as f64;
    let mut probabilities = checked_zeros::<f64>(counts.len())?;
    for ((p, w), &count) in probabilities.iter_mut().zip(weight_sums.iter_mut()).zip(counts) {
        if count > 0 {
            *p = count as f64 / length_f;
            *w /= count as f64;
        }
    }
    Ok((Array1::from(probabilities), Array1::from(weight_sums)))
}
