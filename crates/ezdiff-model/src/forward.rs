//! Forward model: latent parameters to predicted summary statistics.
//!
//! With `y = exp(-a·ν)`:
//!   R = 1 / (y + 1)
//!   M = τ + (a / 2ν) · (1 − y) / (1 + y)
//!   V = (a / 2ν³) · (1 − 2aνy − y²) / (y + 1)²

use ezdiff_core::{LatentParameters, PredictedStatistics};

/// Closed-form accuracy rate, mean RT and RT variance.
///
/// Finite for any positive boundary and drift.
pub fn predict(params: &LatentParameters) -> PredictedStatistics {
    let a = params.boundary;
    let v = params.drift;
    let y = (-a * v).exp();

    let accuracy_rate = 1.0 / (y + 1.0);
    let mean_rt = params.nondecision + (a / (2.0 * v)) * ((1.0 - y) / (1.0 + y));
    let rt_variance =
        (a / (2.0 * v.powi(3))) * ((1.0 - 2.0 * a * v * y - y * y) / (y + 1.0).powi(2));

    PredictedStatistics {
        accuracy_rate,
        mean_rt,
        rt_variance,
    }
}
