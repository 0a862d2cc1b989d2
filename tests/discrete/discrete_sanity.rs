// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mitoolbox::estimators::approaches::discrete::mle::{
    DiscreteEntropy, conditional_entropy, entropy, joint_entropy,
};
use mitoolbox::estimators::entropy::Entropy;
use mitoolbox::estimators::{GlobalValue, LogBase};
use ndarray::{Array1, array};
use rstest::rstest;

use crate::test_helpers::{assert_measure_close, generate_gaussian_data, generate_random_data};

#[test]
fn discrete_entropy_known_example() {
    let data = array![1, 1, 2, 3, 3, 4, 5];
    let est = DiscreteEntropy::new(&data).unwrap();

    // H = log2(7) - (4/7) bits
    let expected = 7f64.log2() - 4.0 / 7.0;
    assert_abs_diff_eq!(est.global_value(), expected, epsilon = 1e-12);
}

#[test]
fn discrete_entropy_uniform() {
    let data = array![0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0];
    let h = Entropy::new_discrete(&data).unwrap().global_value();
    assert_abs_diff_eq!(h, 2.0, epsilon = 1e-12);
}

#[test]
fn discrete_entropy_floors_real_values() {
    let data = array![0.2, 0.7, 1.1, 1.9];
    assert_abs_diff_eq!(entropy(&data).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn discrete_entropy_constant_and_empty() {
    assert_eq!(entropy(&array![4.0, 4.0, 4.0]).unwrap(), 0.0);
    assert_eq!(entropy(&Array1::<f64>::zeros(0)).unwrap(), 0.0);
    assert_eq!(joint_entropy(&Array1::<f64>::zeros(0), &Array1::<f64>::zeros(0)).unwrap(), 0.0);
}

#[test]
fn discrete_entropy_natural_base() {
    let data = array![0, 1, 2, 3];
    let est = DiscreteEntropy::new(&data).unwrap().with_base(std::f64::consts::E);
    assert_eq!(est.base(), std::f64::consts::E);
    assert_abs_diff_eq!(est.global_value(), 4f64.ln(), epsilon = 1e-12);
}

#[rstest]
#[case(generate_random_data(100, 5, 42), generate_random_data(100, 5, 43))]
#[case(generate_random_data(1000, 12, 44), generate_random_data(1000, 3, 45))]
#[case(generate_gaussian_data(400, 0.0, 3.0, 46), generate_gaussian_data(400, 1.0, 1.5, 47))]
fn joint_entropy_bounds_marginals(#[case] x: Array1<f64>, #[case] y: Array1<f64>) {
    let h_x = entropy(&x).unwrap();
    let h_y = entropy(&y).unwrap();
    let h_xy = joint_entropy(&x, &y).unwrap();

    assert!(h_x >= 0.0);
    assert!(h_y >= 0.0);
    assert!(h_xy >= h_x - 1e-12);
    assert!(h_xy >= h_y - 1e-12);
    assert!(h_xy <= h_x + h_y + 1e-12);
}

#[rstest]
#[case(generate_random_data(200, 4, 50), generate_random_data(200, 6, 51))]
#[case(array![1.0, 1.0, 2.0, 2.0, 3.0, 3.0], array![1.0, 2.0, 1.0, 2.0, 1.0, 2.0])]
fn conditional_entropy_chain_rule(#[case] x: Array1<f64>, #[case] y: Array1<f64>) {
    // H(X|Y) = H(X,Y) - H(Y)
    let h_x_given_y = conditional_entropy(&x, &y).unwrap();
    let expected = joint_entropy(&x, &y).unwrap() - entropy(&y).unwrap();
    assert_measure_close(h_x_given_y, expected, 1e-10, "chain rule");
    assert!(h_x_given_y <= entropy(&x).unwrap() + 1e-12);
}

#[test]
fn conditional_entropy_of_determined_variable() {
    let x = array![0, 1, 2, 0, 1, 2];
    assert_abs_diff_eq!(conditional_entropy(&x, &x).unwrap(), 0.0, epsilon = 1e-12);
    let est = Entropy::new_conditional(&x, &array![5, 5, 5, 5, 5, 5]).unwrap();
    assert_abs_diff_eq!(est.global_value(), 3f64.log2(), epsilon = 1e-12);
}

#[test]
fn joint_entropy_facade_matches_function() {
    let x = generate_random_data(64, 4, 60);
    let y = generate_random_data(64, 4, 61);
    let est = Entropy::new_joint(&x, &y).unwrap();
    assert_eq!(est.global_value(), joint_entropy(&x, &y).unwrap());
}
