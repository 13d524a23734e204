//! Value types that flow through one simulate-and-recover iteration.

pub mod parameters;
pub mod policy;
pub mod statistics;

pub use parameters::{
    LatentParameters, ParameterRanges, ParameterVector, RecoveredParameters, UniformRange,
};
pub use policy::{DegeneratePolicy, EdgeCorrection};
pub use statistics::{ObservedStatistics, PredictedStatistics};
