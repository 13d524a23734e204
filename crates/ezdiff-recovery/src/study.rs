//! A full study: one driver run per configured sample size.

use ezdiff_core::{EzDiffConfig, RecoveryError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::driver::RecoveryDriver;
use crate::report::StudyReport;
use crate::summary::ConditionSummary;

/// Runs every sample-size condition and collects a [`StudyReport`].
///
/// Condition `k` (its position in `sample_sizes`) draws from stream `k`
/// of a ChaCha8 generator seeded with the study seed. Results therefore
/// do not depend on whether conditions run sequentially or in parallel.
#[derive(Debug, Clone)]
pub struct RecoveryStudy {
    driver: RecoveryDriver,
    sample_sizes: Vec<u32>,
    iterations: u32,
    seed: Option<u64>,
    parallel: bool,
}

impl RecoveryStudy {
    /// Duplicate sample sizes are dropped, keeping first occurrences.
    pub fn new(driver: RecoveryDriver, sample_sizes: &[u32], iterations: u32) -> Self {
        let mut unique = Vec::with_capacity(sample_sizes.len());
        for &n in sample_sizes {
            if !unique.contains(&n) {
                unique.push(n);
            }
        }
        Self {
            driver,
            sample_sizes: unique,
            iterations,
            seed: None,
            parallel: false,
        }
    }

    pub fn from_config(config: &EzDiffConfig) -> Result<Self, RecoveryError> {
        EzDiffConfig::validate(config)?;
        let driver = RecoveryDriver::from_config(config)?;
        let mut study = Self::new(
            driver,
            &config.study.effective_sample_sizes(),
            config.study.effective_iterations(),
        )
        .with_parallel(config.study.effective_parallel());
        study.seed = config.study.seed;
        Ok(study)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn sample_sizes(&self) -> &[u32] {
        &self.sample_sizes
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn run(&self) -> Result<StudyReport, RecoveryError> {
        self.run_with_progress(|_| {})
    }

    /// Run all conditions, calling `on_condition` once per finished
    /// condition in configured order.
    pub fn run_with_progress(
        &self,
        mut on_condition: impl FnMut(&ConditionSummary),
    ) -> Result<StudyReport, RecoveryError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::info!(
            seed,
            conditions = self.sample_sizes.len(),
            iterations = self.iterations,
            parallel = self.parallel,
            "starting recovery study"
        );

        let mut report = StudyReport::new();
        if self.parallel {
            let summaries = self
                .sample_sizes
                .par_iter()
                .enumerate()
                .map(|(index, &n)| self.run_condition(seed, index as u64, n))
                .collect::<Result<Vec<_>, _>>()?;
            for summary in summaries {
                on_condition(&summary);
                report.insert(summary);
            }
        } else {
            for (index, &n) in self.sample_sizes.iter().enumerate() {
                let summary = self.run_condition(seed, index as u64, n)?;
                on_condition(&summary);
                report.insert(summary);
            }
        }
        Ok(report)
    }

    /// One condition on its own stream.
    pub fn run_condition(
        &self,
        seed: u64,
        stream: u64,
        sample_size: u32,
    ) -> Result<ConditionSummary, RecoveryError> {
        let mut rng = condition_rng(seed, stream);
        let mut summary = self.driver.run(sample_size, self.iterations, &mut rng)?;
        summary.seed = Some(seed);
        summary.stream = Some(stream);
        Ok(summary)
    }
}

/// Generator for one condition: the study seed with a per-condition stream.
pub fn condition_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}
