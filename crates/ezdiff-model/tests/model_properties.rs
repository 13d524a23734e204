//! Property tests for the forward model, sampler, and inverse model.

use ezdiff_core::{LatentParameters, ObservedStatistics, PredictedStatistics};
use ezdiff_model::{predict, recover, sample_observed, InverseModel};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn arb_params() -> impl Strategy<Value = LatentParameters> {
    (0.5f64..2.0, 0.5f64..2.0, 0.1f64..0.5)
        .prop_map(|(boundary, drift, nondecision)| LatentParameters::new(boundary, drift, nondecision))
}

// ── Forward outputs stay in their domains ───────────────────────────────

proptest! {
    #[test]
    fn forward_outputs_in_domain(params in arb_params()) {
        let stats = predict(&params);
        prop_assert!(stats.accuracy_rate > 0.0 && stats.accuracy_rate < 1.0);
        prop_assert!(stats.mean_rt > params.nondecision);
        prop_assert!(stats.rt_variance > 0.0);
        prop_assert!(stats.rt_variance.is_finite());
    }
}

// ── Sampler outputs stay in their domains ───────────────────────────────

proptest! {
    #[test]
    fn sampler_outputs_in_domain(
        params in arb_params(),
        n in 2u32..5000,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let obs = sample_observed(&predict(&params), n, &mut rng).unwrap();
        prop_assert!((0.0..=1.0).contains(&obs.accuracy_rate));
        prop_assert!(obs.rt_variance >= 0.0);
        prop_assert!(obs.correct_count <= n);
        prop_assert_eq!(obs.trial_count, n);
    }

    #[test]
    fn sampler_rejects_small_n(n in 0u32..2, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let predicted = predict(&LatentParameters::new(1.0, 1.0, 0.3));
        prop_assert!(sample_observed(&predicted, n, &mut rng).is_err());
    }
}

// ── Noiseless round trip ────────────────────────────────────────────────

proptest! {
    #[test]
    fn noiseless_round_trip(params in arb_params()) {
        let obs = ObservedStatistics::noiseless(&predict(&params), 1000);
        let est = recover(&obs).unwrap();
        prop_assert!((est.boundary - params.boundary).abs() < 1e-6,
            "boundary {} vs {}", est.boundary, params.boundary);
        prop_assert!((est.drift - params.drift).abs() < 1e-6,
            "drift {} vs {}", est.drift, params.drift);
        prop_assert!((est.nondecision - params.nondecision).abs() < 1e-6,
            "nondecision {} vs {}", est.nondecision, params.nondecision);
    }

    #[test]
    fn inverse_never_panics_on_edge_accuracy(
        accuracy in prop_oneof![Just(0.0), Just(1.0), Just(0.5), 0.0f64..=1.0],
        mean_rt in 0.0f64..2.0,
        rt_variance in 0.0f64..1.0,
        n in 2u32..100,
    ) {
        let obs = ObservedStatistics {
            accuracy_rate: accuracy,
            mean_rt,
            rt_variance,
            correct_count: (accuracy * n as f64).round() as u32,
            trial_count: n,
        };
        // Either a finite estimate or an explicit degeneracy; never NaN.
        if let Ok(est) = InverseModel::default().recover(&obs) {
            prop_assert!(est.as_vector().is_finite());
        }
    }
}

#[test]
fn predicted_statistics_inverse_forward_consistency() {
    // forward(inverse(x)) ≈ x on a hand-made, non-degenerate observation.
    let obs = ObservedStatistics {
        accuracy_rate: 0.8,
        mean_rt: 0.55,
        rt_variance: 0.04,
        correct_count: 80,
        trial_count: 100,
    };
    let est = recover(&obs).unwrap();
    let back: PredictedStatistics = predict(&LatentParameters::new(
        est.boundary,
        est.drift,
        est.nondecision,
    ));
    assert!((back.accuracy_rate - 0.8).abs() < 1e-9);
    assert!((back.mean_rt - 0.55).abs() < 1e-9);
    assert!((back.rt_variance - 0.04).abs() < 1e-9);
}
