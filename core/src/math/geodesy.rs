use crate::math::angle::AngleHelper;

/// Mean Earth radius used for every great-circle computation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Spherical-earth helpers. Inputs are degrees; trig runs in radians.
pub struct GeoHelper;

impl GeoHelper {
    /// Haversine great-circle distance between two points, in kilometers.
    pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let dlat = (lat2 - lat1).to_radians();
        let dlon = (lon2 - lon1).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
        // rounding can push `a` a hair past 1 for near-antipodal pairs
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Initial bearing from point 1 towards point 2, in degrees within [0, 360).
    ///
    /// 0 is true north and angles grow clockwise. Coincident points have no
    /// defined heading and report 0.
    pub fn bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let dlon = (lon2 - lon1).to_radians();

        let x = dlon.sin() * lat2_rad.cos();
        let y = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * dlon.cos();

        AngleHelper::normalize_deg(x.atan2(y).to_degrees())
    }
}
