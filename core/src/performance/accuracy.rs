use crate::config::SystemConfiguration;
use crate::prelude::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// One-sigma measurement errors expected at a given range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrackAccuracy {
    pub range_error_km: f64,
    pub bearing_error_deg: f64,
    pub velocity_error_mps: f64,
    /// Bearing error projected as arc length at the target range
    pub cross_range_error_km: f64,
}

/// Scales the configured accuracy constants by `range_km / nominal_range`.
///
/// Range and bearing errors grow linearly; Doppler-derived velocity error
/// grows with the square root of the range factor.
pub fn track_accuracy(config: &SystemConfiguration, range_km: f64) -> ModelResult<TrackAccuracy> {
    if !range_km.is_finite() || range_km < 0.0 {
        return Err(ModelError::InvalidInput(format!(
            "range must be a non-negative distance, got {}",
            range_km
        )));
    }

    let params = config.parameters();
    let range_factor = range_km / params.nominal_range_km;
    let bearing_error_deg = params.bearing_accuracy_deg * range_factor;

    Ok(TrackAccuracy {
        range_error_km: params.range_accuracy_km * range_factor,
        bearing_error_deg,
        velocity_error_mps: params.velocity_accuracy_mps * range_factor.sqrt(),
        cross_range_error_km: range_km * bearing_error_deg.to_radians(),
    })
}
