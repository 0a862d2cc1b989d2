pub mod entropy;
pub mod measure;
pub mod mutual_information;
pub mod traits;
pub mod approaches;

pub use measure::Measure;
pub use traits::{GlobalValue, LogBase};
