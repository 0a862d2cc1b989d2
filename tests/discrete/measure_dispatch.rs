// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use mitoolbox::estimators::approaches::discrete::{mle, renyi, weighted};
use mitoolbox::estimators::measure::{ERROR_SENTINEL, Measure};
use mitoolbox::InfoError;
use ndarray::{Array1, array};
use std::collections::HashSet;

use crate::test_helpers::{generate_random_data, generate_weights};

struct Inputs {
    x: Array1<f64>,
    y: Array1<f64>,
    z: Array1<f64>,
    w: Array1<f64>,
}

fn inputs() -> Inputs {
    Inputs {
        x: generate_random_data(120, 4, 70),
        y: generate_random_data(120, 3, 71),
        z: generate_random_data(120, 2, 72),
        w: generate_weights(120, 73),
    }
}

fn all_measures(i: &Inputs) -> Vec<Measure<'_>> {
    vec![
        Measure::Entropy { data: &i.x },
        Measure::JointEntropy { first: &i.x, second: &i.y },
        Measure::ConditionalEntropy { data: &i.x, condition: &i.y },
        Measure::MutualInformation { first: &i.x, second: &i.y },
        Measure::ConditionalMutualInformation { data: &i.x, target: &i.y, condition: &i.z },
        Measure::WeightedEntropy { data: &i.x, weights: &i.w },
        Measure::WeightedJointEntropy { first: &i.x, second: &i.y, weights: &i.w },
        Measure::WeightedConditionalEntropy { data: &i.x, condition: &i.y, weights: &i.w },
        Measure::WeightedMutualInformation { first: &i.x, second: &i.y, weights: &i.w },
        Measure::WeightedConditionalMutualInformation {
            data: &i.x,
            target: &i.y,
            condition: &i.z,
            weights: &i.w,
        },
        Measure::RenyiEntropy { alpha: 2.0, data: &i.x },
        Measure::JointRenyiEntropy { alpha: 2.0, first: &i.x, second: &i.y },
        Measure::ConditionalRenyiEntropy { alpha: 2.0, data: &i.x, condition: &i.y },
        Measure::RenyiMutualInformation { alpha: 2.0, first: &i.x, second: &i.y },
        Measure::RenyiJointMutualInformation { alpha: 2.0, first: &i.x, second: &i.y },
    ]
}

#[test]
fn dispatch_matches_direct_calls() {
    let i = inputs();
    let (x, y, z, w) = (&i.x, &i.y, &i.z, &i.w);
    let expected = vec![
        mle::entropy(x),
        mle::joint_entropy(x, y),
        mle::conditional_entropy(x, y),
        mle::mutual_information(x, y),
        mle::conditional_mutual_information(x, y, z),
        weighted::weighted_entropy(x, w),
        weighted::weighted_joint_entropy(x, y, w),
        weighted::weighted_conditional_entropy(x, y, w),
        weighted::weighted_mutual_information(x, y, w),
        weighted::weighted_conditional_mutual_information(x, y, z, w),
        renyi::renyi_entropy(2.0, x),
        renyi::joint_renyi_entropy(2.0, x, y),
        renyi::conditional_renyi_entropy(2.0, x, y),
        renyi::renyi_mi_divergence(2.0, x, y),
        renyi::renyi_mi_joint(2.0, x, y),
    ];

    let measures = all_measures(&i);
    assert_eq!(measures.len(), expected.len());
    for (measure, direct) in measures.iter().zip(expected) {
        assert_eq!(measure.compute(), direct, "{}", measure.name());
        assert_eq!(measure.num_samples(), 120);
    }
}

#[test]
fn dispatch_names_are_unique() {
    let i = inputs();
    let names: HashSet<&str> = all_measures(&i).iter().map(|m| m.name()).collect();
    assert_eq!(names.len(), 15);
}

#[test]
fn sentinel_on_length_mismatch() {
    let x = array![0.0, 1.0, 1.0];
    let y = array![0.0, 1.0];
    let measure = Measure::MutualInformation { first: &x, second: &y };
    assert_eq!(measure.compute(), Err(InfoError::LengthMismatch { expected: 3, found: 2 }));
    assert_eq!(measure.compute_or_sentinel(), ERROR_SENTINEL);
}

#[test]
fn sentinel_on_alpha_one() {
    let x = array![0.0, 1.0, 1.0];
    let measure = Measure::RenyiEntropy { alpha: 1.0, data: &x };
    assert_eq!(measure.compute_or_sentinel(), -1.0);
}

#[test]
fn empty_input_is_zero_not_sentinel() {
    let empty = Array1::<f64>::zeros(0);
    let measure = Measure::ConditionalEntropy { data: &empty, condition: &empty };
    assert_eq!(measure.compute_or_sentinel(), 0.0);
}
