//! Shared constants for the recovery study.

// ---- Parameter ranges ----

/// Lower bound of the boundary separation draw.
pub const BOUNDARY_MIN: f64 = 0.5;

/// Upper bound of the boundary separation draw.
pub const BOUNDARY_MAX: f64 = 2.0;

/// Lower bound of the drift rate draw.
pub const DRIFT_MIN: f64 = 0.5;

/// Upper bound of the drift rate draw.
pub const DRIFT_MAX: f64 = 2.0;

/// Lower bound of the nondecision time draw (seconds).
pub const NONDECISION_MIN: f64 = 0.1;

/// Upper bound of the nondecision time draw (seconds).
pub const NONDECISION_MAX: f64 = 0.5;

// ---- Study defaults ----

/// Default sample-size conditions.
pub const DEFAULT_SAMPLE_SIZES: [u32; 3] = [10, 40, 4000];

/// Default Monte Carlo iterations per condition.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Smallest sample size the observation sampler accepts.
pub const MIN_SAMPLE_SIZE: u32 = 2;

/// Default redraw budget under `DegeneratePolicy::Resample`.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

// ---- Inversion ----

/// Default clamp distance for the observed accuracy rate.
pub const DEFAULT_CLAMP_EPSILON: f64 = 1e-6;

/// Confidence level for the interval on the mean bias.
pub const BIAS_CI_LEVEL: f64 = 0.95;

// ---- Output ----

/// Default report path.
pub const DEFAULT_OUTPUT_PATH: &str = "results.json";

/// Project config file name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "ezdiff.toml";

/// Number of components in a parameter vector.
pub const PARAMETER_COUNT: usize = 3;
