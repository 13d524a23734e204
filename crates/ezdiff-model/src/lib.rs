//! # ezdiff-model
//!
//! The numeric pieces of one simulate-and-recover iteration:
//! - [`generator`]: draws true parameters from uniform ranges
//! - [`forward`]: closed-form accuracy, mean RT and RT variance
//! - [`sampler`]: finite-sample statistics from their sampling distributions
//! - [`inverse`]: algebraic recovery of the parameters from statistics
//!
//! Randomness is always passed in; nothing here owns an RNG.

pub mod forward;
pub mod generator;
pub mod inverse;
pub mod sampler;

pub use forward::predict;
pub use generator::ParameterGenerator;
pub use inverse::{recover, InverseModel};
pub use sampler::{sample_observed, ObservationSampler};
