pub mod discrete;

// Unified re-exports for common estimators so tests and users can import
// mitoolbox::estimators::approaches::* ergonomically.
pub use discrete::mle::{
    DiscreteConditionalEntropy, DiscreteConditionalMutualInformation, DiscreteEntropy,
    DiscreteJointEntropy, DiscreteMutualInformation,
};
pub use discrete::renyi::{
    ConditionalRenyiEntropy, JointRenyiEntropy, RenyiEntropy, RenyiJointMutualInformation,
    RenyiMutualInformation,
};
pub use discrete::weighted::{
    WeightedConditionalEntropy, WeightedConditionalMutualInformation, WeightedEntropy,
    WeightedJointEntropy, WeightedMutualInformation,
};
