//! Property-based tests for the SMD estimator's mathematical invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - finite, non-negative results or numeric errors over the valid domain
//!   - monotonicity in the p-value
//!   - symmetry in the two groups' degrees of freedom
//!   - domain errors for every out-of-range p-value
//!
//! p-values and degrees of freedom are drawn log-uniformly so tiny tails,
//! near-one p-values, fractional df and df in the millions all get hit.

use proptest::prelude::*;

use smd_estimator::{calculate_smd, hedges_j, EstimateResult, EstimatorConfig, SmdEstimator};

/// p in [1e-12, 0.1) log-uniform, or [0.9, 0.999999).
fn p_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-12.0f64..-1.0).prop_map(|e| 10f64.powf(e)),
        0.1f64..0.9,
        0.9f64..0.999_999,
    ]
}

/// df in [0.05, 1e6) log-uniform.
fn freedom() -> impl Strategy<Value = f64> {
    (-1.3f64..6.0).prop_map(|e| 10f64.powf(e))
}

fn assert_usable(result: &EstimateResult<f64>) -> Result<(), TestCaseError> {
    match result {
        Ok(smd) => {
            prop_assert!(smd.is_finite(), "smd must be finite, got {}", smd);
            prop_assert!(*smd >= 0.0, "smd must be non-negative, got {}", smd);
        }
        Err(e) => prop_assert!(!e.is_domain_error(), "valid input rejected: {:?}", e),
    }
    Ok(())
}

proptest! {
    /// Valid inputs give a finite, non-negative SMD or a numeric error,
    /// never a domain error.
    #[test]
    fn prop_valid_inputs_finite_non_negative(
        p in p_value(),
        df1 in freedom(),
        df2 in freedom(),
    ) {
        assert_usable(&calculate_smd(p, df1, df2))?;
    }

    /// With two or more total df the critical value stays representable
    /// for every p down to 1e-12.
    #[test]
    fn prop_moderate_df_always_succeeds(
        p in p_value(),
        df1 in freedom(),
        df2 in freedom(),
    ) {
        prop_assume!(df1 + df2 >= 2.0);
        let smd = calculate_smd(p, df1, df2);
        prop_assert!(smd.is_ok(), "({}, {}, {}) gave {:?}", p, df1, df2, smd);
    }

    /// Halving the p-value strictly increases the SMD.
    #[test]
    fn prop_smaller_p_gives_larger_smd(
        p in p_value(),
        df1 in freedom(),
        df2 in freedom(),
    ) {
        if let (Ok(larger_p), Ok(smaller_p)) =
            (calculate_smd(p, df1, df2), calculate_smd(p / 2.0, df1, df2))
        {
            prop_assert!(
                smaller_p > larger_p,
                "smd({}) = {} should exceed smd({}) = {}",
                p / 2.0, smaller_p, p, larger_p
            );
        }
    }

    /// Swapping the groups leaves the result unchanged.
    #[test]
    fn prop_symmetric_in_degrees_of_freedom(
        p in p_value(),
        df1 in freedom(),
        df2 in freedom(),
    ) {
        prop_assert_eq!(calculate_smd(p, df1, df2), calculate_smd(p, df2, df1));
    }

    /// P-values outside (0, 1) are always domain errors.
    #[test]
    fn prop_out_of_range_p_rejected(
        p in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0],
        df1 in freedom(),
        df2 in freedom(),
    ) {
        let err = calculate_smd(p, df1, df2).unwrap_err();
        prop_assert!(err.is_domain_error());
    }

    /// Non-positive degrees of freedom are always domain errors.
    #[test]
    fn prop_non_positive_df_rejected(
        p in p_value(),
        bad in -100.0f64..=0.0,
        good in freedom(),
    ) {
        prop_assert!(calculate_smd(p, bad, good).unwrap_err().is_domain_error());
        prop_assert!(calculate_smd(p, good, bad).unwrap_err().is_domain_error());
    }

    /// Hedges' correction is a shrinkage factor in (0, 1).
    #[test]
    fn prop_hedges_j_in_unit_interval(df in 2.0f64..1e12) {
        let j = hedges_j(df).unwrap();
        prop_assert!(j > 0.0 && j < 1.0, "J must be in (0, 1), got {}", j);
    }

    /// The corrected estimate never exceeds the uncorrected one.
    #[test]
    fn prop_corrected_not_larger(
        p in p_value(),
        df1 in 1.0f64..1e6,
        df2 in 1.0f64..1e6,
    ) {
        let config = EstimatorConfig { hedges_correction: Some(true), ..Default::default() };
        let corrected = SmdEstimator::new(config).smd(p, df1, df2).unwrap();
        let plain = calculate_smd(p, df1, df2).unwrap();
        prop_assert!(corrected <= plain);
    }
}
