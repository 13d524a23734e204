//! ezdiff CLI - simulate-and-recover study for the EZ-diffusion model.

mod commands;
mod progress;

use anyhow::{Context, Result};
use clap::Parser;
use ezdiff_core::config::CliOverrides;
use ezdiff_core::tracing::init_tracing;
use ezdiff_core::{EzDiffConfig, LatentParameters, ObservedStatistics};
use ezdiff_model::{predict, InverseModel};
use ezdiff_recovery::RecoveryStudy;

use commands::{Cli, Commands};

fn load_config(cli: &Cli, overrides: Option<&CliOverrides>) -> Result<EzDiffConfig> {
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    EzDiffConfig::load(&cwd, cli.config.as_deref(), overrides).context("failed to load configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match &cli.command {
        Commands::Run {
            iterations,
            sample_sizes,
            seed,
            parallel,
            policy,
            output,
        } => {
            let overrides = CliOverrides {
                sample_sizes: sample_sizes.clone(),
                iterations: *iterations,
                seed: *seed,
                parallel: parallel.then_some(true),
                degenerate_policy: policy.clone(),
                output: output.clone(),
            };
            let config = load_config(&cli, Some(&overrides))?;
            let study = RecoveryStudy::from_config(&config).context("invalid study setup")?;

            println!("{}", progress::PROGRESS_HEADER);
            let report = study
                .run_with_progress(|summary| println!("{}", progress::progress_row(summary)))
                .context("recovery study failed")?;

            tracing::debug!(conditions = report.len(), "study finished");

            let path = config.output.effective_path();
            report
                .write(&path, config.output.effective_pretty())
                .with_context(|| format!("failed to write {}", path.display()))?;
            if let Some(seed) = report.seed() {
                println!("seed {seed}; report written to {}", path.display());
            }
        }

        Commands::Recover {
            accuracy,
            mean_rt,
            rt_variance,
            trials,
        } => {
            let config = load_config(&cli, None)?;
            let model = InverseModel::new(
                config.model.effective_clamp_epsilon(),
                config.model.effective_edge_correction(),
            );
            let observed = ObservedStatistics {
                accuracy_rate: *accuracy,
                mean_rt: *mean_rt,
                rt_variance: *rt_variance,
                correct_count: (accuracy.clamp(0.0, 1.0) * *trials as f64).round() as u32,
                trial_count: *trials,
            };
            match model.recover(&observed) {
                Ok(est) => println!(
                    "drift {:.6}  boundary {:.6}  nondecision {:.6}",
                    est.drift, est.boundary, est.nondecision
                ),
                Err(err) => println!("undefined: {err}"),
            }
        }

        Commands::Predict {
            boundary,
            drift,
            nondecision,
        } => {
            anyhow::ensure!(
                *boundary > 0.0 && *drift > 0.0,
                "boundary and drift must be positive"
            );
            let stats = predict(&LatentParameters::new(*boundary, *drift, *nondecision));
            println!(
                "accuracy {:.6}  mean_rt {:.6}  rt_variance {:.6}",
                stats.accuracy_rate, stats.mean_rt, stats.rt_variance
            );
        }

        Commands::Config => {
            let config = load_config(&cli, None)?;
            print!("{}", config.to_toml().context("failed to render configuration")?);
        }
    }

    Ok(())
}
