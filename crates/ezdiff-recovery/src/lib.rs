//! # ezdiff-recovery
//!
//! Simulate-and-recover driver for the EZ-diffusion model.
//!
//! Each iteration runs generate → predict → sample → invert → score.
//! Scores accumulate per sample-size condition into mean bias and mean
//! squared error, ordered (drift, boundary, nondecision). A study runs
//! every configured condition on its own random stream and writes a JSON
//! report keyed by sample size.

pub mod accumulator;
pub mod driver;
pub mod report;
pub mod study;
pub mod summary;

pub use accumulator::RecoveryAccumulator;
pub use driver::{IterationOutcome, RecoveryDriver};
pub use report::StudyReport;
pub use study::RecoveryStudy;
pub use summary::{BiasInterval, ConditionSummary};
