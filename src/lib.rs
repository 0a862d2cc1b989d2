// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # mitoolbox
//!
//! Discrete information-theoretic measures estimated from finite samples: entropy,
//! joint and conditional entropy, mutual information, conditional mutual information,
//! their sample-weighted variants and Rényi-α generalisations.
//!
//! ## Quick Start
//!
//! ```rust
//! use mitoolbox::estimators::entropy::Entropy;
//! use mitoolbox::estimators::mutual_information::MutualInformation;
//! use mitoolbox::estimators::traits::GlobalValue;
//! use ndarray::array;
//!
//! let x = array![1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
//! let y = array![1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
//!
//! let h = Entropy::new_discrete(&x)?.global_value();
//! let mi = MutualInformation::new_discrete(&x, &y)?.global_value();
//! assert!((h - 3f64.log2()).abs() < 1e-12);
//! assert!(mi.abs() < 1e-12);
//! # Ok::<(), mitoolbox::InfoError>(())
//! ```
//!
//! ## Measures
//!
//! | Measure | Shannon | Weighted | Rényi |
//! |---------|---------|----------|-------|
//! | Entropy | ✅ | ✅ | ✅ |
//! | Joint entropy | ✅ | ✅ | ✅ |
//! | Conditional entropy | ✅ | ✅ | ✅ (partition sum) |
//! | Mutual information | ✅ | ✅ | ✅ (divergence, entropy difference) |
//! | Conditional mutual information | ✅ | ✅ | ❌ |
//!
//! ## Architecture
//!
//! 1. **State normalisation and merging** (`discrete_utils`): floor real values to
//!    integer states and build joint variables.
//! 2. **Probability tables** (`probability`): count-then-divide estimates of marginal,
//!    joint and weighted distributions.
//! 3. **Measures** (`mle`, `weighted`, `renyi`): estimators implementing `GlobalValue`.
//! 4. **Public API**: factory types (`Entropy`, `MutualInformation`) and the `Measure`
//!    command enum.
//!
//! Results are in bits unless an estimator is reconfigured with `LogBase::with_base`.
//! Every fallible step, including table allocation, reports an [`InfoError`].

pub mod error;
pub mod estimators;

pub use error::{InfoError, Result};
pub use estimators::approaches::discrete::discrete_utils::{
    Discretise, LOG_BASE, StateCodes, merge_arrays, merge_arrays_arities, merge_multiple_arrays,
    merge_multiple_arrays_arities, normalise, number_of_unique_values,
};
pub use estimators::approaches::discrete::mle::{
    conditional_entropy, conditional_mutual_information, entropy, joint_entropy,
    mutual_information,
};
pub use estimators::approaches::discrete::probability::{
    JointProbabilityState, ProbabilityState, WeightedJointProbState, WeightedProbState,
    calculate_joint_probability, calculate_probability, calculate_weighted_joint_probability,
    calculate_weighted_probability,
};
pub use estimators::approaches::discrete::renyi::{
    conditional_renyi_entropy, conditional_renyi_entropy_with_states, joint_renyi_entropy,
    renyi_entropy, renyi_mi_divergence, renyi_mi_joint,
};
pub use estimators::approaches::discrete::weighted::{
    weighted_conditional_entropy, weighted_conditional_mutual_information, weighted_entropy,
    weighted_joint_entropy, weighted_mutual_information,
};
pub use estimators::{GlobalValue, LogBase, Measure};
