use crate::config::{SiteDescriptor, SystemConfiguration};
use crate::math::{AngleHelper, GeoHelper};
use serde::{Deserialize, Serialize};

/// Outcome of testing one target point against one site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CoverageResult {
    pub in_coverage: bool,
    pub range_km: f64,
    pub bearing_deg: f64,
}

/// Range-ring and azimuth-wedge test shared by every site.
///
/// The range window is global to the network; the wedge comes from each site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageGate {
    min_range_km: f64,
    max_range_km: f64,
}

impl CoverageGate {
    pub fn new(min_range_km: f64, max_range_km: f64) -> Self {
        Self {
            min_range_km,
            max_range_km,
        }
    }

    pub fn from_config(config: &SystemConfiguration) -> Self {
        let params = config.parameters();
        Self::new(params.min_range_km, params.max_range_km)
    }

    /// Range and bearing are reported even when the point is rejected.
    pub fn evaluate(
        &self,
        site: &SiteDescriptor,
        target_lat: f64,
        target_lon: f64,
    ) -> CoverageResult {
        let range_km =
            GeoHelper::distance_km(site.latitude_deg, site.longitude_deg, target_lat, target_lon);
        let bearing_deg =
            GeoHelper::bearing_deg(site.latitude_deg, site.longitude_deg, target_lat, target_lon);

        let in_coverage = self.accepts(site, range_km, bearing_deg);
        CoverageResult {
            in_coverage,
            range_km,
            bearing_deg,
        }
    }

    /// Gate decision for an already-computed range and bearing from `site`.
    pub fn accepts(&self, site: &SiteDescriptor, range_km: f64, bearing_deg: f64) -> bool {
        if range_km < self.min_range_km || range_km > self.max_range_km {
            return false;
        }
        AngleHelper::separation_deg(bearing_deg, site.azimuth_center_deg)
            <= site.coverage_angle_deg / 2.0
    }
}
