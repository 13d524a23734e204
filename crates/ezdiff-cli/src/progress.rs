//! Human-readable progress output.

use ezdiff_core::ParameterVector;
use ezdiff_recovery::ConditionSummary;

pub const PROGRESS_HEADER: &str = "N       Biases (drift, boundary, nondecision)       Squared Errors";

fn fmt_vector(v: Option<&ParameterVector>) -> String {
    match v {
        Some(v) => {
            let [d, b, n] = v.to_array();
            format!("[{d:>9.5} {b:>9.5} {n:>9.5}]")
        }
        None => format!("[{:^29}]", "undefined"),
    }
}

/// One table row per finished condition.
pub fn progress_row(summary: &ConditionSummary) -> String {
    let mut row = format!(
        "{:<7} {}   {}",
        summary.sample_size,
        fmt_vector(summary.biases.as_ref()),
        fmt_vector(summary.squared_errors.as_ref())
    );
    if summary.degenerate_iterations > 0 {
        row.push_str(&format!(
            "   ({} of {} degenerate, {:.1}%)",
            summary.degenerate_iterations,
            summary.iterations,
            100.0 * summary.degenerate_rate()
        ));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_row_shows_size_and_degenerate_count() {
        let summary = ConditionSummary {
            sample_size: 40,
            iterations: 1000,
            valid_iterations: 990,
            degenerate_iterations: 10,
            degenerate_reasons: BTreeMap::new(),
            redraws: 0,
            biases: Some(ParameterVector::new(0.04, 0.09, -0.01)),
            squared_errors: Some(ParameterVector::new(0.15, 0.3, 0.01)),
            bias_std_errors: None,
            bias_ci95: None,
            seed: None,
            stream: None,
        };
        let row = progress_row(&summary);
        assert!(row.starts_with("40 "));
        assert!(row.contains("0.04000"));
        assert!(row.contains("(10 of 1000 degenerate, 1.0%)"));
    }

    #[test]
    fn test_row_marks_undefined_means() {
        let summary = ConditionSummary {
            sample_size: 2,
            iterations: 1,
            valid_iterations: 0,
            degenerate_iterations: 1,
            degenerate_reasons: BTreeMap::new(),
            redraws: 0,
            biases: None,
            squared_errors: None,
            bias_std_errors: None,
            bias_ci95: None,
            seed: None,
            stream: None,
        };
        let row = progress_row(&summary);
        assert_eq!(row.matches("undefined").count(), 2);
        assert!(row.contains("(1 of 1 degenerate, 100.0%)"));
    }
}
