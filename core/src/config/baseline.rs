//! Notional Arctic baseline used when no configuration file is supplied.
//!
//! Site locations and target profiles are unclassified placeholders sized
//! after a JORN-class network; replace them with surveyed values for real
//! planning work.

use super::{GridExtent, RadarParameters, RouteDescriptor, SiteDescriptor, TargetProfile};
use std::collections::BTreeMap;

pub const DEFAULT_GRID_RESOLUTION_DEG: f64 = 1.0;

pub fn parameters() -> RadarParameters {
    RadarParameters {
        min_range_km: 500.0,
        max_range_km: 3000.0,
        nominal_range_km: 2000.0,
        coverage_angle_deg: 120.0,
        probability_detection: 0.7,
        range_accuracy_km: 10.0,
        bearing_accuracy_deg: 1.0,
        velocity_accuracy_mps: 25.0,
        update_interval_s: 30.0,
        aurora_degradation_factor: 0.65,
        aurora_occurrence_rate: 0.20,
    }
}

pub fn sites() -> Vec<SiteDescriptor> {
    vec![
        SiteDescriptor::new("Site 1 - Western Arctic", 65.0, -165.0, 0.0, 120.0),
        SiteDescriptor::new("Site 2 - Central Arctic", 70.0, -110.0, 350.0, 120.0),
        SiteDescriptor::new("Site 3 - Eastern Arctic", 68.0, -85.0, 340.0, 120.0),
    ]
}

pub fn target_profiles() -> BTreeMap<String, TargetProfile> {
    [
        ("Large Commercial Aircraft", 50.0, 250.0, 11_000.0, 1.0),
        ("Medium Aircraft", 10.0, 200.0, 9_000.0, 0.9),
        ("Small Aircraft", 2.0, 150.0, 7_000.0, 0.7),
        ("Generic Cruise Missile", 0.5, 250.0, 100.0, 0.5),
    ]
    .into_iter()
    .map(|(name, rcs_m2, speed_mps, altitude_m, pd_modifier)| {
        (
            name.to_string(),
            TargetProfile {
                rcs_m2,
                speed_mps,
                altitude_m,
                pd_modifier,
            },
        )
    })
    .collect()
}

pub fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new(
            "JFK-NRT (New York-Tokyo)",
            vec![(40.6, -73.8), (65.0, -170.0), (75.0, 170.0), (35.8, 139.8)],
        ),
        RouteDescriptor::new(
            "LAX-NRT (Los Angeles-Tokyo)",
            vec![(33.9, -118.4), (55.0, 170.0), (35.8, 139.8)],
        ),
        RouteDescriptor::new(
            "ORD-PEK (Chicago-Beijing)",
            vec![(41.98, -87.9), (70.0, -150.0), (77.0, 180.0), (40.1, 116.6)],
        ),
        RouteDescriptor::new(
            "YVR-HKG (Vancouver-Hong Kong)",
            vec![(49.2, -123.2), (60.0, 175.0), (22.3, 114.2)],
        ),
    ]
}

pub fn grid_extent() -> GridExtent {
    GridExtent {
        lat_min_deg: 50.0,
        lat_max_deg: 85.0,
        lon_min_deg: -180.0,
        lon_max_deg: -60.0,
    }
}
