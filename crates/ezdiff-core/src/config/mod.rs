//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod ezdiff_config;
pub mod model_config;
pub mod output_config;
pub mod study_config;

pub use ezdiff_config::{CliOverrides, EzDiffConfig};
pub use model_config::ModelConfig;
pub use output_config::OutputConfig;
pub use study_config::StudyConfig;
