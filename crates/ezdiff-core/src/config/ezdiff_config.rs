//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ModelConfig, OutputConfig, StudyConfig};
use crate::constants::{MIN_SAMPLE_SIZE, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;
use crate::types::{DegeneratePolicy, EdgeCorrection};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`EZDIFF_*`)
/// 3. Project config (`ezdiff.toml`, or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EzDiffConfig {
    pub study: StudyConfig,
    pub model: ModelConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sample_sizes: Option<Vec<u32>>,
    pub iterations: Option<u32>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
    pub degenerate_policy: Option<String>,
    pub output: Option<PathBuf>,
}

impl EzDiffConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit` must exist when given; the project file in `root` is
    /// optional.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    tracing::debug!(path = %project_config_path.display(), "loading project config");
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &EzDiffConfig) -> Result<(), ConfigError> {
        if let Some(&n) = config
            .study
            .sample_sizes
            .iter()
            .find(|&&n| n < MIN_SAMPLE_SIZE)
        {
            return Err(ConfigError::ValidationFailed {
                field: "study.sample_sizes".to_string(),
                message: format!("every sample size must be at least {MIN_SAMPLE_SIZE}, got {n}"),
            });
        }
        if config.study.iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "study.iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.study.max_attempts == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "study.max_attempts".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref name) = config.study.degenerate_policy {
            if DegeneratePolicy::from_name(name, 1).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "study.degenerate_policy".to_string(),
                    message: format!("unknown policy '{name}', expected exclude or resample"),
                });
            }
        }
        if let Some(eps) = config.model.clamp_epsilon {
            if !(eps > 0.0 && eps < 0.5) {
                return Err(ConfigError::ValidationFailed {
                    field: "model.clamp_epsilon".to_string(),
                    message: "must be in (0, 0.5)".to_string(),
                });
            }
        }
        if let Some(ref name) = config.model.edge_correction {
            if EdgeCorrection::from_name(name).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "model.edge_correction".to_string(),
                    message: format!("unknown correction '{name}', expected clamp or half_trial"),
                });
            }
        }
        config.model.effective_ranges().validate()?;
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut EzDiffConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: EzDiffConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut EzDiffConfig, other: &EzDiffConfig) {
        // Study
        if !other.study.sample_sizes.is_empty() {
            base.study.sample_sizes = other.study.sample_sizes.clone();
        }
        if other.study.iterations.is_some() {
            base.study.iterations = other.study.iterations;
        }
        if other.study.seed.is_some() {
            base.study.seed = other.study.seed;
        }
        if other.study.parallel.is_some() {
            base.study.parallel = other.study.parallel;
        }
        if other.study.degenerate_policy.is_some() {
            base.study.degenerate_policy = other.study.degenerate_policy.clone();
        }
        if other.study.max_attempts.is_some() {
            base.study.max_attempts = other.study.max_attempts;
        }

        // Model
        if other.model.clamp_epsilon.is_some() {
            base.model.clamp_epsilon = other.model.clamp_epsilon;
        }
        if other.model.edge_correction.is_some() {
            base.model.edge_correction = other.model.edge_correction.clone();
        }
        if other.model.boundary_range.is_some() {
            base.model.boundary_range = other.model.boundary_range;
        }
        if other.model.drift_range.is_some() {
            base.model.drift_range = other.model.drift_range;
        }
        if other.model.nondecision_range.is_some() {
            base.model.nondecision_range = other.model.nondecision_range;
        }

        // Output
        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
        if other.output.pretty.is_some() {
            base.output.pretty = other.output.pretty;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `EZDIFF_ITERATIONS`, `EZDIFF_SAMPLE_SIZES=10,40,4000`, etc.
    fn apply_env_overrides(config: &mut EzDiffConfig) {
        Self::apply_env_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    /// Unparseable values are ignored.
    pub fn apply_env_from(config: &mut EzDiffConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("EZDIFF_ITERATIONS") {
            if let Ok(v) = val.trim().parse::<u32>() {
                config.study.iterations = Some(v);
            }
        }
        if let Some(val) = lookup("EZDIFF_SEED") {
            if let Ok(v) = val.trim().parse::<u64>() {
                config.study.seed = Some(v);
            }
        }
        if let Some(val) = lookup("EZDIFF_SAMPLE_SIZES") {
            if let Some(sizes) = parse_sample_sizes(&val) {
                config.study.sample_sizes = sizes;
            }
        }
        if let Some(val) = lookup("EZDIFF_PARALLEL") {
            if let Ok(v) = val.trim().parse::<bool>() {
                config.study.parallel = Some(v);
            }
        }
        if let Some(val) = lookup("EZDIFF_OUTPUT") {
            if !val.trim().is_empty() {
                config.output.path = Some(PathBuf::from(val.trim()));
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut EzDiffConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.sample_sizes {
            config.study.sample_sizes = v.clone();
        }
        if let Some(v) = cli.iterations {
            config.study.iterations = Some(v);
        }
        if let Some(v) = cli.seed {
            config.study.seed = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.study.parallel = Some(v);
        }
        if let Some(ref v) = cli.degenerate_policy {
            config.study.degenerate_policy = Some(v.clone());
        }
        if let Some(ref v) = cli.output {
            config.output.path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse a comma-separated list such as `10,40,4000`.
/// Returns `None` if any entry is not an unsigned integer.
pub fn parse_sample_sizes(raw: &str) -> Option<Vec<u32>> {
    let sizes: Option<Vec<u32>> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().ok())
        .collect();
    sizes.filter(|v| !v.is_empty())
}
