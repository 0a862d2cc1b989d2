use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::Discretise;
use crate::estimators::approaches::{
    ConditionalRenyiEntropy, DiscreteConditionalEntropy, DiscreteEntropy, DiscreteJointEntropy,
    JointRenyiEntropy, RenyiEntropy, WeightedConditionalEntropy, WeightedEntropy,
    WeightedJointEntropy,
};
pub use crate::estimators::traits::{GlobalValue, LogBase};

/// Entropy estimation methods for discrete data
///
/// This struct provides static methods for creating entropy estimators.
/// Every constructor builds the probability tables immediately and fails on
/// mismatched lengths, invalid Rényi orders, or allocation failure.
pub struct Entropy;

impl Entropy {
    /// Creates a new Shannon entropy estimator H(X)
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sample vector; real values are floored to states
    ///
    /// # Returns
    ///
    /// A discrete entropy estimator reporting bits by default
    pub fn new_discrete<T: Discretise>(data: &Array1<T>) -> Result<DiscreteEntropy> {
        DiscreteEntropy::new(data)
    }

    /// Creates a joint entropy estimator H(X,Y)
    pub fn new_joint<A: Discretise, B: Discretise>(
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<DiscreteJointEntropy> {
        DiscreteJointEntropy::new(first, second)
    }

    /// Creates a conditional entropy estimator H(X|Y)
    pub fn new_conditional<A: Discretise, B: Discretise>(
        data: &Array1<A>,
        condition: &Array1<B>,
    ) -> Result<DiscreteConditionalEntropy> {
        DiscreteConditionalEntropy::new(data, condition)
    }

    /// Creates a weighted entropy estimator H_w(X)
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sample vector
    /// * `weights` - One weight per sample
    pub fn new_weighted<T: Discretise>(data: &Array1<T>, weights: &Array1<f64>) -> Result<WeightedEntropy> {
        WeightedEntropy::new(data, weights)
    }

    pub fn new_weighted_joint<A: Discretise, B: Discretise>(
        first: &Array1<A>,
        second: &Array1<B>,
        weights: &Array1<f64>,
    ) -> Result<WeightedJointEntropy> {
        WeightedJointEntropy::new(first, second, weights)
    }

    pub fn new_weighted_conditional<A: Discretise, B: Discretise>(
        data: &Array1<A>,
        condition: &Array1<B>,
        weights: &Array1<f64>,
    ) -> Result<WeightedConditionalEntropy> {
        WeightedConditionalEntropy::new(data, condition, weights)
    }

    /// Creates a Rényi entropy estimator H_α(X)
    ///
    /// # Arguments
    ///
    /// * `alpha` - Rényi order, finite and different from 1
    /// * `data` - One-dimensional sample vector
    pub fn new_renyi<T: Discretise>(alpha: f64, data: &Array1<T>) -> Result<RenyiEntropy> {
        RenyiEntropy::new(alpha, data)
    }

    pub fn new_renyi_joint<A: Discretise, B: Discretise>(
        alpha: f64,
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<JointRenyiEntropy> {
        JointRenyiEntropy::new(alpha, first, second)
    }

    /// Creates a conditional Rényi estimator, the sum of per-partition Rényi entropies
    /// of X with one partition per distinct value of the condition
    pub fn new_renyi_conditional<A: Discretise, B: Discretise>(
        alpha: f64,
        data: &Array1<A>,
        condition: &Array1<B>,
    ) -> Result<ConditionalRenyiEntropy> {
        ConditionalRenyiEntropy::new(alpha, data, condition)
    }
}
