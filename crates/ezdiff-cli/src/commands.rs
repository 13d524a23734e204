//! CLI command definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// EZ-diffusion simulate-and-recover study
#[derive(Parser)]
#[command(name = "ezdiff", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./ezdiff.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the recovery study and write the JSON report
    Run {
        /// Iterations per sample size
        #[arg(short, long)]
        iterations: Option<u32>,

        /// Comma-separated sample sizes, e.g. 10,40,4000
        #[arg(short = 'n', long, value_delimiter = ',')]
        sample_sizes: Option<Vec<u32>>,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Run sample sizes on all cores
        #[arg(long)]
        parallel: bool,

        /// Degenerate-draw policy: exclude or resample
        #[arg(long)]
        policy: Option<String>,

        /// Report path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recover parameters from one set of observed statistics
    Recover {
        /// Observed accuracy rate in [0, 1]
        #[arg(long)]
        accuracy: f64,

        /// Observed mean response time
        #[arg(long)]
        mean_rt: f64,

        /// Observed response-time variance
        #[arg(long)]
        rt_variance: f64,

        /// Trial count behind the statistics
        #[arg(long, default_value = "100")]
        trials: u32,
    },

    /// Print the statistics the forward model predicts
    Predict {
        #[arg(long)]
        boundary: f64,

        #[arg(long)]
        drift: f64,

        #[arg(long)]
        nondecision: f64,
    },

    /// Print the effective configuration as TOML
    Config,
}
