use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::Discretise;
use crate::estimators::approaches::{
    DiscreteConditionalMutualInformation, DiscreteMutualInformation, RenyiJointMutualInformation,
    RenyiMutualInformation, WeightedConditionalMutualInformation, WeightedMutualInformation,
};

/// Mutual information estimation methods for discrete data
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a mutual information estimator I(X;Y)
    pub fn new_discrete<A: Discretise, B: Discretise>(
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<DiscreteMutualInformation> {
        DiscreteMutualInformation::new(first, second)
    }

    /// Creates a conditional mutual information estimator I(X;Y|Z)
    ///
    /// # Arguments
    ///
    /// * `data` - The variable X
    /// * `target` - The variable Y
    /// * `condition` - The conditioning variable Z
    pub fn new_cmi_discrete<A: Discretise, B: Discretise, C: Discretise>(
        data: &Array1<A>,
        target: &Array1<B>,
        condition: &Array1<C>,
    ) -> Result<DiscreteConditionalMutualInformation> {
        DiscreteConditionalMutualInformation::new(data, target, condition)
    }

    pub fn new_weighted<A: Discretise, B: Discretise>(
        first: &Array1<A>,
        second: &Array1<B>,
        weights: &Array1<f64>,
    ) -> Result<WeightedMutualInformation> {
        WeightedMutualInformation::new(first, second, weights)
    }

    pub fn new_cmi_weighted<A: Discretise, B: Discretise, C: Discretise>(
        data: &Array1<A>,
        target: &Array1<B>,
        condition: &Array1<C>,
        weights: &Array1<f64>,
    ) -> Result<WeightedConditionalMutualInformation> {
        WeightedConditionalMutualInformation::new(data, target, condition, weights)
    }

    /// Creates a Rényi mutual information estimator based on the α-divergence
    /// between the joint distribution and the product of marginals
    pub fn new_renyi_divergence<A: Discretise, B: Discretise>(
        alpha: f64,
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<RenyiMutualInformation> {
        RenyiMutualInformation::new(alpha, first, second)
    }

    /// Creates a Rényi mutual information estimator H_α(X) + H_α(Y) - H_α(X,Y)
    pub fn new_renyi_joint<A: Discretise, B: Discretise>(
        alpha: f64,
        first: &Array1<A>,
        second: &Array1<B>,
    ) -> Result<RenyiJointMutualInformation> {
        RenyiJointMutualInformation::new(alpha, first, second)
    }
}
