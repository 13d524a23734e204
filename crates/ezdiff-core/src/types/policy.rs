//! Knobs for the inverse model and the degenerate-draw handling.

use serde::{Deserialize, Serialize};

/// What the driver does when an iteration's inversion is degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Drop the iteration from the means and count it.
    #[default]
    Exclude,
    /// Redraw observations for the same true parameters, up to
    /// `max_attempts` draws in total, then exclude.
    Resample { max_attempts: u32 },
}

impl DegeneratePolicy {
    /// Parse the config name (`"exclude"` or `"resample"`).
    pub fn from_name(name: &str, max_attempts: u32) -> Option<Self> {
        match name {
            "exclude" => Some(Self::Exclude),
            "resample" => Some(Self::Resample {
                max_attempts: max_attempts.max(1),
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Resample { .. } => "resample",
        }
    }

    /// Number of observation draws allowed per iteration.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Exclude => 1,
            Self::Resample { max_attempts } => (*max_attempts).max(1),
        }
    }
}

/// How an observed accuracy rate of exactly 0 or 1 is pulled off the edge
/// before the logit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCorrection {
    /// Clamp into `[ε, 1 − ε]`.
    #[default]
    Clamp,
    /// Replace 0 by `1/(2N)` and 1 by `1 − 1/(2N)`, then clamp.
    HalfTrial,
}

impl EdgeCorrection {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clamp" => Some(Self::Clamp),
            "half_trial" => Some(Self::HalfTrial),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::HalfTrial => "half_trial",
        }
    }
}
