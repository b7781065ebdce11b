//! Closed-form detection probability model.
//!
//! Pd holds at its base value out to the nominal range, then falls off
//! linearly to 70% of base at the maximum range. The 30% decay is a tunable
//! planning heuristic, not a fitted propagation model.

use crate::config::SystemConfiguration;
use crate::math::SamplingHelper;
use crate::prelude::{Condition, ModelError, ModelResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Fraction of base Pd lost between the nominal and maximum range.
pub const RANGE_DECAY_AT_MAX: f64 = 0.3;

/// Range step used when scanning for the detection-range limit.
pub const RANGE_SCAN_STEP_KM: f64 = 50.0;

/// Upper bound on ranges visited by one scan or curve.
pub const MAX_RANGE_SAMPLES: usize = 1_000_000;

/// One sample of a Pd-versus-range curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurvePoint {
    pub range_km: f64,
    pub pd: f64,
}

/// Probability of detecting `profile_name` at `range_km` under `condition`.
///
/// Defined for every non-negative range, including ranges past the maximum
/// where the decay factor bottoms out at zero. The result is always in [0, 1].
/// Negative or non-finite ranges are rejected.
pub fn detection_probability(
    config: &SystemConfiguration,
    profile_name: &str,
    range_km: f64,
    condition: Condition,
) -> ModelResult<f64> {
    if !range_km.is_finite() || range_km < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "range must be a non-negative distance, got {}",
            range_km
        )));
    }
    let profile = config.target_profile(profile_name)?;
    let params = config.parameters();

    let base_pd = params.probability_detection * profile.pd_modifier;
    let range_factor = if range_km > params.nominal_range_km {
        let excess = (range_km - params.nominal_range_km)
            / (params.max_range_km - params.nominal_range_km);
        (1.0 - RANGE_DECAY_AT_MAX * excess).max(0.0)
    } else {
        1.0
    };

    let mut pd = base_pd * range_factor;
    if condition == Condition::Auroral {
        pd *= params.aurora_degradation_factor;
    }

    Ok(pd.clamp(0.0, 1.0))
}

/// First scanned range at which Pd drops below `pd_threshold`.
///
/// The scan walks `[min_range, max_range)` in [`RANGE_SCAN_STEP_KM`] steps.
/// When no scanned range crosses the threshold the maximum range is returned;
/// that is a ceiling on the search, not a promise of detection at max range.
/// The threshold must lie in [0, 1].
pub fn max_detection_range(
    config: &SystemConfiguration,
    profile_name: &str,
    pd_threshold: f64,
    condition: Condition,
) -> ModelResult<f64> {
    if !(0.0..=1.0).contains(&pd_threshold) {
        return Err(ModelError::InvalidInput(format!(
            "Pd threshold must lie in [0, 1], got {}",
            pd_threshold
        )));
    }
    config.target_profile(profile_name)?;
    let params = config.parameters();

    for range_km in scan_ranges(params.min_range_km, params.max_range_km, RANGE_SCAN_STEP_KM)? {
        let pd = detection_probability(config, profile_name, range_km, condition)?;
        if pd < pd_threshold {
            debug!(
                "{} ({}) falls below Pd {} at {} km",
                profile_name, condition, pd_threshold, range_km
            );
            return Ok(range_km);
        }
    }

    warn!(
        "{} ({}) stays above Pd {} across the scan; reporting max range {} km",
        profile_name, condition, pd_threshold, params.max_range_km
    );
    Ok(params.max_range_km)
}

/// Pd sampled over `[min_range, max_range)` every `step_km` kilometers.
pub fn probability_curve(
    config: &SystemConfiguration,
    profile_name: &str,
    condition: Condition,
    step_km: f64,
) -> ModelResult<Vec<CurvePoint>> {
    config.target_profile(profile_name)?;
    let params = config.parameters();

    scan_ranges(params.min_range_km, params.max_range_km, step_km)?
        .map(|range_km| {
            detection_probability(config, profile_name, range_km, condition)
                .map(|pd| CurvePoint { range_km, pd })
        })
        .collect()
}

fn scan_ranges(start: f64, stop: f64, step: f64) -> ModelResult<impl Iterator<Item = f64>> {
    let count = SamplingHelper::count(start, stop, step, MAX_RANGE_SAMPLES)?;
    Ok((0..count).map(move |index| start + index as f64 * step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigurationDraft, TargetProfile};

    const LARGE: &str = "Large Commercial Aircraft";

    fn pd(config: &SystemConfiguration, profile: &str, range: f64, condition: Condition) -> f64 {
        detection_probability(config, profile, range, condition).unwrap()
    }

    #[test]
    fn pd_is_flat_inside_nominal_range() {
        let config = SystemConfiguration::baseline();
        for range in [0.0, 500.0, 1200.0, 2000.0] {
            assert!((pd(&config, LARGE, range, Condition::Clear) - 0.7).abs() < 1e-12);
        }
    }

    #[test]
    fn pd_decays_linearly_to_seventy_percent_at_max_range() {
        let config = SystemConfiguration::baseline();
        assert!((pd(&config, LARGE, 2500.0, Condition::Clear) - 0.7 * 0.85).abs() < 1e-12);
        assert!((pd(&config, LARGE, 3000.0, Condition::Clear) - 0.7 * 0.7).abs() < 1e-12);
    }

    #[test]
    fn pd_is_non_increasing_beyond_nominal_and_floors_at_zero() {
        let config = SystemConfiguration::baseline();
        let mut previous = pd(&config, LARGE, 2000.0, Condition::Clear);
        let mut range = 2000.0;
        while range <= 15_000.0 {
            let current = pd(&config, LARGE, range, Condition::Clear);
            assert!(current <= previous + 1e-12);
            assert!(current >= 0.0);
            previous = current;
            range += 250.0;
        }
        assert_eq!(pd(&config, LARGE, 20_000.0, Condition::Clear), 0.0);
    }

    #[test]
    fn auroral_conditions_scale_by_degradation_factor() {
        let config = SystemConfiguration::baseline();
        let clear = pd(&config, "Medium Aircraft", 2400.0, Condition::Clear);
        let auroral = pd(&config, "Medium Aircraft", 2400.0, Condition::Auroral);
        assert!((auroral - clear * 0.65).abs() < 1e-12);
        assert!(auroral <= clear);
    }

    #[test]
    fn result_is_clamped_when_multipliers_exceed_one() {
        let mut draft = ConfigurationDraft::default();
        draft.parameters.probability_detection = 1.0;
        draft.parameters.aurora_degradation_factor = 3.0;
        let config = draft.build().unwrap();
        assert_eq!(pd(&config, LARGE, 100.0, Condition::Auroral), 1.0);
    }

    #[test]
    fn unknown_profile_is_reported() {
        let config = SystemConfiguration::baseline();
        let err = detection_probability(&config, "Balloon", 1000.0, Condition::Clear).unwrap_err();
        assert_eq!(err, ModelError::UnknownProfile("Balloon".into()));
        assert!(max_detection_range(&config, "Balloon", 0.5, Condition::Clear).is_err());
    }

    #[test]
    fn max_range_for_large_aircraft_hits_scan_ceiling() {
        // 2950 km still yields Pd 0.5005; 3000 km is outside the half-open scan
        let config = SystemConfiguration::baseline();
        let range = max_detection_range(&config, LARGE, 0.5, Condition::Clear).unwrap();
        assert_eq!(range, 3000.0);
    }

    #[test]
    fn max_range_for_medium_aircraft_is_first_crossing() {
        let config = SystemConfiguration::baseline();
        let range = max_detection_range(&config, "Medium Aircraft", 0.5, Condition::Clear).unwrap();
        assert_eq!(range, 2700.0);
    }

    #[test]
    fn weak_targets_fail_at_skip_zone_edge() {
        let config = SystemConfiguration::baseline();
        let range = max_detection_range(&config, LARGE, 0.5, Condition::Auroral).unwrap();
        assert_eq!(range, 500.0);
        let range =
            max_detection_range(&config, "Generic Cruise Missile", 0.5, Condition::Clear).unwrap();
        assert_eq!(range, 500.0);
    }

    #[test]
    fn zero_threshold_is_never_crossed() {
        let mut draft = ConfigurationDraft::default();
        draft.target_profiles.insert(
            "Decoy".into(),
            TargetProfile {
                rcs_m2: 0.1,
                speed_mps: 100.0,
                altitude_m: 50.0,
                pd_modifier: 0.0,
            },
        );
        let config = draft.build().unwrap();
        let range = max_detection_range(&config, "Decoy", 0.0, Condition::Clear).unwrap();
        assert_eq!(range, 3000.0);
    }

    #[test]
    fn curve_samples_half_open_range_window() {
        let config = SystemConfiguration::baseline();
        let curve = probability_curve(&config, LARGE, Condition::Clear, 50.0).unwrap();
        assert_eq!(curve.len(), 50);
        assert_eq!(curve[0].range_km, 500.0);
        assert_eq!(curve[curve.len() - 1].range_km, 2950.0);
        assert!(curve.windows(2).all(|pair| pair[1].pd <= pair[0].pd + 1e-12));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let config = SystemConfiguration::baseline();
        for range in [f64::NAN, f64::INFINITY, -1.0] {
            assert!(matches!(
                detection_probability(&config, LARGE, range, Condition::Clear),
                Err(ModelError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let config = SystemConfiguration::baseline();
        for threshold in [f64::NAN, 5.0, -0.1] {
            assert!(matches!(
                max_detection_range(&config, LARGE, threshold, Condition::Clear),
                Err(ModelError::InvalidInput(_))
            ));
        }
        assert_eq!(
            max_detection_range(&config, LARGE, 1.0, Condition::Clear).unwrap(),
            500.0
        );
    }

    #[test]
    fn curve_rejects_step_needing_too_many_samples() {
        let config = SystemConfiguration::baseline();
        assert!(matches!(
            probability_curve(&config, LARGE, Condition::Clear, 1e-12),
            Err(ModelError::InvalidInput(_))
        ));
        let fine = probability_curve(&config, LARGE, Condition::Clear, 1.0).unwrap();
        assert_eq!(fine.len(), 2500);
    }

    #[test]
    fn curve_rejects_non_positive_step() {
        let config = SystemConfiguration::baseline();
        assert!(matches!(
            probability_curve(&config, LARGE, Condition::Clear, 0.0),
            Err(ModelError::InvalidInput(_))
        ));
    }
}
