// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mitoolbox::InfoError;
use mitoolbox::estimators::approaches::discrete::mle;
use mitoolbox::estimators::approaches::discrete::renyi::{
    ConditionalRenyiEntropy, conditional_renyi_entropy, conditional_renyi_entropy_with_states,
    joint_renyi_entropy, renyi_entropy, renyi_mi_divergence, renyi_mi_joint,
};
use mitoolbox::estimators::entropy::Entropy;
use mitoolbox::estimators::mutual_information::MutualInformation;
use mitoolbox::estimators::{GlobalValue, LogBase};
use mitoolbox::merge_arrays;
use ndarray::{Array1, array};
use rstest::rstest;

use crate::test_helpers::{generate_gaussian_data, generate_random_data};

#[rstest]
#[case(0.5)]
#[case(2.0)]
#[case(3.7)]
fn renyi_entropy_of_uniform_is_log_states(#[case] alpha: f64) {
    let data = array![0, 1, 2, 3, 3, 2, 1, 0];
    assert_abs_diff_eq!(renyi_entropy(alpha, &data).unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn renyi_collision_entropy() {
    // alpha = 2: -log2(sum p^2) with p = [3/4, 1/4]
    let data = array![0, 0, 0, 1];
    let expected = -(10.0f64 / 16.0).log2();
    let est = Entropy::new_renyi(2.0, &data).unwrap();
    assert_eq!(est.alpha(), 2.0);
    assert_abs_diff_eq!(est.global_value(), expected, epsilon = 1e-12);
    let nats = est.with_base(std::f64::consts::E).global_value();
    assert_abs_diff_eq!(nats, -(10.0f64 / 16.0).ln(), epsilon = 1e-12);
}

#[rstest]
#[case(generate_random_data(500, 6, 42))]
#[case(generate_gaussian_data(500, 0.0, 2.5, 43))]
fn renyi_entropy_approaches_shannon(#[case] data: Array1<f64>) {
    let shannon = mle::entropy(&data).unwrap();
    let below = renyi_entropy(0.999, &data).unwrap();
    let above = renyi_entropy(1.001, &data).unwrap();
    assert_abs_diff_eq!(below, shannon, epsilon = 1e-2);
    assert_abs_diff_eq!(above, shannon, epsilon = 1e-2);
    // Rényi entropy is non-increasing in alpha
    assert!(below >= shannon - 1e-12);
    assert!(above <= shannon + 1e-12);
}

#[test]
fn renyi_rejects_invalid_alpha() {
    let data = array![0, 1];
    assert_eq!(renyi_entropy(1.0, &data).unwrap_err(), InfoError::InvalidAlpha(1.0));
    assert!(matches!(renyi_entropy(f64::NAN, &data), Err(InfoError::InvalidAlpha(a)) if a.is_nan()));
    assert!(matches!(
        joint_renyi_entropy(f64::INFINITY, &data, &data),
        Err(InfoError::InvalidAlpha(_))
    ));
    assert!(matches!(renyi_mi_divergence(1.0, &data, &data), Err(InfoError::InvalidAlpha(_))));
    assert!(matches!(
        conditional_renyi_entropy(1.0, &data, &data),
        Err(InfoError::InvalidAlpha(_))
    ));
}

#[test]
fn renyi_of_empty_vector_is_zero() {
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(renyi_entropy(2.0, &empty).unwrap(), 0.0);
    assert_eq!(joint_renyi_entropy(2.0, &empty, &empty).unwrap(), 0.0);
    assert_eq!(renyi_mi_divergence(2.0, &empty, &empty).unwrap(), 0.0);
}

#[test]
fn joint_renyi_entropy_uniform_pairs() {
    let x = array![0, 0, 1, 1];
    let y = array![0, 1, 0, 1];
    assert_abs_diff_eq!(joint_renyi_entropy(2.0, &x, &y).unwrap(), 2.0, epsilon = 1e-12);
    let est = Entropy::new_renyi_joint(0.5, &x, &y).unwrap();
    assert_abs_diff_eq!(est.global_value(), 2.0, epsilon = 1e-12);
}

#[test]
fn conditional_renyi_sums_partitions() {
    // Partition y=5: {0, 1} -> 1 bit, partition y=7: {0, 0} -> 0 bits
    let x = array![0, 1, 0, 0];
    let y = array![5, 5, 7, 7];
    assert_abs_diff_eq!(conditional_renyi_entropy(2.0, &x, &y).unwrap(), 1.0, epsilon = 1e-12);
    let by_codes =
        conditional_renyi_entropy_with_states(2.0, &x, &array![1, 1, 2, 2], 2).unwrap();
    assert_abs_diff_eq!(by_codes, 1.0, epsilon = 1e-12);
}

#[test]
fn conditional_renyi_is_not_weighted_by_condition() {
    // p(y=1) = 1/3 but the 1-bit partition still contributes a full bit
    let x = array![0, 1, 0, 0, 0, 0];
    let y = array![1, 1, 2, 2, 2, 2];
    let est = Entropy::new_renyi_conditional(2.0, &x, &y).unwrap();
    assert_eq!(est.num_partitions(), 2);
    assert_abs_diff_eq!(est.global_value(), 1.0, epsilon = 1e-12);
}

#[test]
fn conditional_renyi_accepts_merged_codes() {
    let x = array![0, 1, 1, 0, 1, 0];
    let y = array![0, 0, 1, 1, 0, 0];
    let z = array![0, 0, 0, 0, 1, 1];
    let merged = merge_arrays(&y, &z).unwrap();
    let direct = ConditionalRenyiEntropy::with_states(2.0, &x, &merged.codes, merged.num_states)
        .unwrap()
        .global_value();
    // (y, z) combinations are already distinct, so relabelling gives the same partitions
    let via_labels = conditional_renyi_entropy(2.0, &x, &merged.codes).unwrap();
    assert_abs_diff_eq!(direct, via_labels, epsilon = 1e-12);
}

#[test]
fn conditional_renyi_empty_partitions_contribute_nothing() {
    let x = array![0, 1];
    let h = conditional_renyi_entropy_with_states(2.0, &x, &array![1, 1], 3).unwrap();
    assert_abs_diff_eq!(h, 1.0, epsilon = 1e-12);
}

#[test]
fn conditional_renyi_rejects_codes_out_of_range() {
    let x = array![0, 1];
    assert_eq!(
        conditional_renyi_entropy_with_states(2.0, &x, &array![0, 1], 1).unwrap_err(),
        InfoError::InvalidConditionCode { code: 0, num_states: 1 }
    );
    assert_eq!(
        conditional_renyi_entropy_with_states(2.0, &x, &array![1, 3], 2).unwrap_err(),
        InfoError::InvalidConditionCode { code: 3, num_states: 2 }
    );
    assert_eq!(
        conditional_renyi_entropy_with_states(2.0, &x, &array![1], 1).unwrap_err(),
        InfoError::LengthMismatch { expected: 2, found: 1 }
    );
}

#[test]
fn renyi_divergence_of_independent_uniform_is_zero() {
    let x = array![0, 0, 1, 1];
    let y = array![0, 1, 0, 1];
    assert_abs_diff_eq!(renyi_mi_divergence(2.0, &x, &y).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn renyi_divergence_of_identical_binary() {
    // sum = 2 * 0.5^2 * 0.25^-1 = 2 -> log2(2) / (2 - 1)
    let x = array![0, 0, 1, 1];
    let est = MutualInformation::new_renyi_divergence(2.0, &x, &x).unwrap();
    assert_abs_diff_eq!(est.global_value(), 1.0, epsilon = 1e-12);
}

#[test]
fn renyi_divergence_approaches_shannon_mi() {
    let x = generate_random_data(400, 4, 60);
    let y = generate_random_data(400, 5, 61);
    let mi = mle::mutual_information(&x, &y).unwrap();
    let near = renyi_mi_divergence(1.0001, &x, &y).unwrap();
    assert_abs_diff_eq!(near, mi, epsilon = 1e-3);
}

#[test]
fn renyi_mi_joint_symmetry_and_independence() {
    let x = generate_random_data(300, 4, 62);
    let y = generate_random_data(300, 3, 63);
    assert_abs_diff_eq!(
        renyi_mi_joint(2.0, &x, &y).unwrap(),
        renyi_mi_joint(2.0, &y, &x).unwrap(),
        epsilon = 1e-12
    );

    let a = array![0, 0, 1, 1];
    let b = array![0, 1, 0, 1];
    let est = MutualInformation::new_renyi_joint(2.0, &a, &b).unwrap();
    assert_abs_diff_eq!(est.global_value(), 0.0, epsilon = 1e-12);
    assert_eq!(est.with_base(2.0).base(), 2.0);
}
