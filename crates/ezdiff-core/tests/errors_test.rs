//! Tests for error codes and error conversions.

use ezdiff_core::{
    ConfigError, DegenerateReason, EzDiffErrorCode, InversionError, RecoveryError, SamplingError,
};

#[test]
fn test_sampling_error_is_domain_violation() {
    let err = SamplingError::InsufficientTrials {
        trial_count: 1,
        minimum: 2,
    };
    assert_eq!(err.error_code(), "DOMAIN_VIOLATION");
    assert!(err.coded_string().starts_with("[DOMAIN_VIOLATION]"));
    assert!(err.to_string().contains("got 1"));
}

#[test]
fn test_inversion_error_reasons() {
    let cases = [
        (
            InversionError::NonPositiveVariance { variance: 0.0 },
            DegenerateReason::NonPositiveVariance,
        ),
        (
            InversionError::NegativeRadicand { radicand: -0.1 },
            DegenerateReason::NegativeRadicand,
        ),
        (
            InversionError::ZeroDrift { accuracy_rate: 0.5 },
            DegenerateReason::ZeroDrift,
        ),
        (
            InversionError::NonFiniteInput {
                field: "mean_rt",
                value: f64::NAN,
            },
            DegenerateReason::NonFiniteInput,
        ),
    ];
    for (err, reason) in cases {
        assert_eq!(err.reason(), reason);
        assert_eq!(err.error_code(), "DEGENERATE_INVERSION");
    }
}

#[test]
fn test_recovery_error_forwards_inner_codes() {
    let from_sampling: RecoveryError = SamplingError::InsufficientTrials {
        trial_count: 0,
        minimum: 2,
    }
    .into();
    assert_eq!(from_sampling.error_code(), "DOMAIN_VIOLATION");

    let from_config: RecoveryError = ConfigError::ValidationFailed {
        field: "study.iterations".into(),
        message: "must be greater than 0".into(),
    }
    .into();
    assert_eq!(from_config.error_code(), "CONFIG_ERROR");
    assert_eq!(RecoveryError::NoIterations.error_code(), "RECOVERY_ERROR");
}

#[test]
fn test_reason_names_are_snake_case() {
    assert_eq!(DegenerateReason::ZeroDrift.name(), "zero_drift");
    let json = serde_json::to_string(&DegenerateReason::NegativeRadicand).unwrap();
    assert_eq!(json, "\"negative_radicand\"");
}
