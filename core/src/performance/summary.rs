use crate::config::SystemConfiguration;
use crate::performance::detection::max_detection_range;
use crate::prelude::{Condition, ModelResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pd level used for the reported detection ranges.
pub const DEFAULT_PD_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigurationEcho {
    #[serde(rename = "Number of Sites")]
    pub site_count: usize,
    #[serde(rename = "Coverage Angle per Site (deg)")]
    pub coverage_angle_deg: f64,
    #[serde(rename = "Minimum Range (km)")]
    pub min_range_km: f64,
    #[serde(rename = "Maximum Range (km)")]
    pub max_range_km: f64,
    #[serde(rename = "Nominal Range (km)")]
    pub nominal_range_km: f64,
    #[serde(rename = "Update Rate (sec)")]
    pub update_interval_s: f64,
}

/// Aurora statistics; rates and impact are fractions, not percentages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DegradationImpact {
    #[serde(rename = "Performance Factor")]
    pub performance_factor: f64,
    #[serde(rename = "Occurrence Rate")]
    pub occurrence_rate: f64,
    #[serde(rename = "Average Performance Impact")]
    pub average_impact: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeasurementAccuracy {
    #[serde(rename = "Range (km)")]
    pub range_km: f64,
    #[serde(rename = "Bearing (deg)")]
    pub bearing_deg: f64,
    #[serde(rename = "Velocity (m/s)")]
    pub velocity_mps: f64,
}

/// Report document handed to printers and serializers.
///
/// Serializes as a nested section -> field -> value mapping. Detection
/// sections map each target profile to its maximum detection range in km.
/// Profiles are keyed by name and always listed in alphabetical order,
/// matching [`SystemConfiguration::profile_names`], regardless of the order
/// they appeared in the source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceSummary {
    #[serde(rename = "System Configuration")]
    pub configuration: ConfigurationEcho,
    #[serde(rename = "Pd Threshold")]
    pub pd_threshold: f64,
    #[serde(rename = "Detection Performance (Clear Conditions)")]
    pub clear_ranges_km: BTreeMap<String, f64>,
    #[serde(rename = "Detection Performance (Auroral Conditions)")]
    pub auroral_ranges_km: BTreeMap<String, f64>,
    #[serde(rename = "Arctic Degradation")]
    pub degradation: DegradationImpact,
    #[serde(rename = "Measurement Accuracy")]
    pub accuracy: MeasurementAccuracy,
}

impl PerformanceSummary {
    pub fn build(config: &SystemConfiguration) -> ModelResult<Self> {
        Self::build_with_threshold(config, DEFAULT_PD_THRESHOLD)
    }

    pub fn build_with_threshold(
        config: &SystemConfiguration,
        pd_threshold: f64,
    ) -> ModelResult<Self> {
        let params = config.parameters();
        let mut clear_ranges_km = BTreeMap::new();
        let mut auroral_ranges_km = BTreeMap::new();
        for name in config.profile_names() {
            let clear = max_detection_range(config, name, pd_threshold, Condition::Clear)?;
            let auroral = max_detection_range(config, name, pd_threshold, Condition::Auroral)?;
            clear_ranges_km.insert(name.to_string(), clear);
            auroral_ranges_km.insert(name.to_string(), auroral);
        }

        Ok(Self {
            configuration: ConfigurationEcho {
                site_count: config.sites().len(),
                coverage_angle_deg: params.coverage_angle_deg,
                min_range_km: params.min_range_km,
                max_range_km: params.max_range_km,
                nominal_range_km: params.nominal_range_km,
                update_interval_s: params.update_interval_s,
            },
            pd_threshold,
            clear_ranges_km,
            auroral_ranges_km,
            degradation: DegradationImpact {
                performance_factor: params.aurora_degradation_factor,
                occurrence_rate: params.aurora_occurrence_rate,
                average_impact: (1.0 - params.aurora_degradation_factor)
                    * params.aurora_occurrence_rate,
            },
            accuracy: MeasurementAccuracy {
                range_km: params.range_accuracy_km,
                bearing_deg: params.bearing_accuracy_deg,
                velocity_mps: params.velocity_accuracy_mps,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_summary_lists_every_profile() {
        let config = SystemConfiguration::baseline();
        let summary = PerformanceSummary::build(&config).unwrap();

        assert_eq!(summary.configuration.site_count, 3);
        assert_eq!(summary.clear_ranges_km.len(), 4);
        assert_eq!(summary.clear_ranges_km["Large Commercial Aircraft"], 3000.0);
        assert_eq!(summary.clear_ranges_km["Medium Aircraft"], 2700.0);
        assert_eq!(summary.auroral_ranges_km["Large Commercial Aircraft"], 500.0);
        for name in config.profile_names() {
            assert!(summary.auroral_ranges_km[name] <= summary.clear_ranges_km[name]);
        }
    }

    #[test]
    fn degradation_impact_combines_factor_and_rate() {
        let summary = PerformanceSummary::build(&SystemConfiguration::baseline()).unwrap();
        assert!((summary.degradation.average_impact - 0.35 * 0.2).abs() < 1e-12);
    }

    #[test]
    fn lower_threshold_extends_reported_ranges() {
        let config = SystemConfiguration::baseline();
        let summary = PerformanceSummary::build_with_threshold(&config, 0.3).unwrap();
        assert_eq!(summary.auroral_ranges_km["Large Commercial Aircraft"], 3000.0);
        assert!(PerformanceSummary::build_with_threshold(&config, 1.5).is_err());
        assert!(PerformanceSummary::build_with_threshold(&config, f64::NAN).is_err());
    }

    #[test]
    fn profiles_are_listed_alphabetically() {
        let summary = PerformanceSummary::build(&SystemConfiguration::baseline()).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        let order: Vec<usize> = [
            "Generic Cruise Missile",
            "Large Commercial Aircraft",
            "Medium Aircraft",
            "Small Aircraft",
        ]
        .iter()
        .map(|name| json.find(name).unwrap())
        .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
        let keys: Vec<&String> = summary.clear_ranges_km.keys().collect();
        assert_eq!(keys[0], "Generic Cruise Missile");
    }

    #[test]
    fn serializes_as_nested_sections() {
        let summary = PerformanceSummary::build(&SystemConfiguration::baseline()).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["System Configuration"]["Number of Sites"], 3);
        assert_eq!(
            value["Detection Performance (Clear Conditions)"]["Medium Aircraft"],
            2700.0
        );
        assert!(value["Arctic Degradation"]["Average Performance Impact"].is_number());
    }
}
