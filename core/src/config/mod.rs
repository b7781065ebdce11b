pub mod baseline;

use crate::prelude::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar system parameters shared by every site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RadarParameters {
    /// Skip-zone edge; nothing closer is detectable (km)
    pub min_range_km: f64,
    pub max_range_km: f64,
    /// Range out to which detection performance is undegraded (km)
    pub nominal_range_km: f64,
    /// Nominal full wedge width per site, reported in summaries (deg)
    pub coverage_angle_deg: f64,
    /// Pd in clear conditions before target modifiers
    pub probability_detection: f64,
    pub range_accuracy_km: f64,
    pub bearing_accuracy_deg: f64,
    pub velocity_accuracy_mps: f64,
    pub update_interval_s: f64,
    /// Multiplier applied to Pd while auroral conditions hold
    pub aurora_degradation_factor: f64,
    /// Fraction of time spent in auroral conditions
    pub aurora_occurrence_rate: f64,
}

impl Default for RadarParameters {
    fn default() -> Self {
        baseline::parameters()
    }
}

/// Location and azimuth wedge of one transmit/receive site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteDescriptor {
    pub id: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Boresight azimuth, degrees true (0 = north, clockwise)
    pub azimuth_center_deg: f64,
    /// Full wedge width; the gate accepts ± half of it around the boresight
    pub coverage_angle_deg: f64,
}

impl SiteDescriptor {
    pub fn new(
        id: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
        azimuth_center_deg: f64,
        coverage_angle_deg: f64,
    ) -> Self {
        Self {
            id: id.into(),
            latitude_deg,
            longitude_deg,
            azimuth_center_deg,
            coverage_angle_deg,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TargetProfile {
    pub rcs_m2: f64,
    pub speed_mps: f64,
    pub altitude_m: f64,
    /// Scales the system Pd for this target class, in [0, 1]
    pub pd_modifier: f64,
}

/// Reference traffic route. Carried for display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteDescriptor {
    pub name: String,
    /// Ordered (latitude, longitude) pairs in degrees
    pub waypoints: Vec<(f64, f64)>,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<String>, waypoints: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            waypoints,
        }
    }
}

/// Lat/lon window sampled by the coverage grid. Upper bounds are exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridExtent {
    pub lat_min_deg: f64,
    pub lat_max_deg: f64,
    pub lon_min_deg: f64,
    pub lon_max_deg: f64,
}

impl Default for GridExtent {
    fn default() -> Self {
        baseline::grid_extent()
    }
}

/// Unvalidated, freely editable form of [`SystemConfiguration`].
///
/// Missing fields fall back to the Arctic baseline when deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigurationDraft {
    pub parameters: RadarParameters,
    pub sites: Vec<SiteDescriptor>,
    pub target_profiles: BTreeMap<String, TargetProfile>,
    pub routes: Vec<RouteDescriptor>,
    pub grid_extent: GridExtent,
    pub grid_resolution_deg: f64,
}

impl Default for ConfigurationDraft {
    fn default() -> Self {
        Self {
            parameters: baseline::parameters(),
            sites: baseline::sites(),
            target_profiles: baseline::target_profiles(),
            routes: baseline::routes(),
            grid_extent: baseline::grid_extent(),
            grid_resolution_deg: baseline::DEFAULT_GRID_RESOLUTION_DEG,
        }
    }
}

impl ConfigurationDraft {
    pub fn build(self) -> ModelResult<SystemConfiguration> {
        SystemConfiguration::try_from(self)
    }
}

/// Validated, immutable configuration consumed by every core operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ConfigurationDraft")]
pub struct SystemConfiguration {
    parameters: RadarParameters,
    sites: Vec<SiteDescriptor>,
    target_profiles: BTreeMap<String, TargetProfile>,
    routes: Vec<RouteDescriptor>,
    grid_extent: GridExtent,
    grid_resolution_deg: f64,
}

impl SystemConfiguration {
    /// The notional three-site Arctic network.
    pub fn baseline() -> Self {
        let draft = ConfigurationDraft::default();
        Self {
            parameters: draft.parameters,
            sites: draft.sites,
            target_profiles: draft.target_profiles,
            routes: draft.routes,
            grid_extent: draft.grid_extent,
            grid_resolution_deg: draft.grid_resolution_deg,
        }
    }

    pub fn parameters(&self) -> &RadarParameters {
        &self.parameters
    }

    pub fn sites(&self) -> &[SiteDescriptor] {
        &self.sites
    }

    pub fn target_profiles(&self) -> &BTreeMap<String, TargetProfile> {
        &self.target_profiles
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn grid_extent(&self) -> &GridExtent {
        &self.grid_extent
    }

    pub fn grid_resolution_deg(&self) -> f64 {
        self.grid_resolution_deg
    }

    /// Looks up a target profile by its exact name.
    pub fn target_profile(&self, name: &str) -> ModelResult<&TargetProfile> {
        self.target_profiles
            .get(name)
            .ok_or_else(|| ModelError::UnknownProfile(name.to_string()))
    }

    /// Profile names in alphabetical order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.target_profiles.keys().map(String::as_str)
    }

    /// Editable copy, for deriving a variant configuration.
    pub fn to_draft(&self) -> ConfigurationDraft {
        ConfigurationDraft {
            parameters: self.parameters,
            sites: self.sites.clone(),
            target_profiles: self.target_profiles.clone(),
            routes: self.routes.clone(),
            grid_extent: self.grid_extent,
            grid_resolution_deg: self.grid_resolution_deg,
        }
    }
}

impl Default for SystemConfiguration {
    fn default() -> Self {
        Self::baseline()
    }
}

impl TryFrom<ConfigurationDraft> for SystemConfiguration {
    type Error = ModelError;

    fn try_from(draft: ConfigurationDraft) -> ModelResult<Self> {
        validate_parameters(&draft.parameters)?;

        ensure(!draft.sites.is_empty(), "at least one site is required")?;
        for site in &draft.sites {
            validate_site(site)?;
        }

        ensure(
            !draft.target_profiles.is_empty(),
            "at least one target profile is required",
        )?;
        for (name, profile) in &draft.target_profiles {
            validate_profile(name, profile)?;
        }

        for route in &draft.routes {
            validate_route(route)?;
        }

        validate_extent(&draft.grid_extent)?;
        ensure(
            draft.grid_resolution_deg.is_finite() && draft.grid_resolution_deg > 0.0,
            format!(
                "grid_resolution_deg must be positive, got {}",
                draft.grid_resolution_deg
            ),
        )?;

        Ok(Self {
            parameters: draft.parameters,
            sites: draft.sites,
            target_profiles: draft.target_profiles,
            routes: draft.routes,
            grid_extent: draft.grid_extent,
            grid_resolution_deg: draft.grid_resolution_deg,
        })
    }
}

fn ensure(condition: bool, message: impl Into<String>) -> ModelResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ModelError::InvalidConfiguration(message.into()))
    }
}

fn ensure_finite(name: &str, value: f64) -> ModelResult<()> {
    ensure(value.is_finite(), format!("{} must be finite, got {}", name, value))
}

fn ensure_probability(name: &str, value: f64) -> ModelResult<()> {
    ensure(
        (0.0..=1.0).contains(&value),
        format!("{} must lie in [0, 1], got {}", name, value),
    )
}

fn ensure_wedge(name: &str, value: f64) -> ModelResult<()> {
    ensure(
        value > 0.0 && value <= 360.0,
        format!("{} must lie in (0, 360], got {}", name, value),
    )
}

fn validate_parameters(params: &RadarParameters) -> ModelResult<()> {
    let named = [
        ("min_range_km", params.min_range_km),
        ("max_range_km", params.max_range_km),
        ("nominal_range_km", params.nominal_range_km),
        ("coverage_angle_deg", params.coverage_angle_deg),
        ("probability_detection", params.probability_detection),
        ("range_accuracy_km", params.range_accuracy_km),
        ("bearing_accuracy_deg", params.bearing_accuracy_deg),
        ("velocity_accuracy_mps", params.velocity_accuracy_mps),
        ("update_interval_s", params.update_interval_s),
        ("aurora_degradation_factor", params.aurora_degradation_factor),
        ("aurora_occurrence_rate", params.aurora_occurrence_rate),
    ];
    for (name, value) in named {
        ensure_finite(name, value)?;
    }

    ensure(
        params.min_range_km >= 0.0
            && params.min_range_km < params.nominal_range_km
            && params.nominal_range_km < params.max_range_km,
        format!(
            "ranges must satisfy 0 <= min < nominal < max, got {} / {} / {}",
            params.min_range_km, params.nominal_range_km, params.max_range_km
        ),
    )?;
    ensure_wedge("coverage_angle_deg", params.coverage_angle_deg)?;
    ensure_probability("probability_detection", params.probability_detection)?;
    ensure_probability("aurora_occurrence_rate", params.aurora_occurrence_rate)?;
    ensure(
        params.aurora_degradation_factor >= 0.0,
        "aurora_degradation_factor must not be negative",
    )?;
    ensure(
        params.range_accuracy_km >= 0.0
            && params.bearing_accuracy_deg >= 0.0
            && params.velocity_accuracy_mps >= 0.0,
        "measurement accuracy constants must not be negative",
    )?;
    ensure(
        params.update_interval_s > 0.0,
        "update_interval_s must be positive",
    )
}

fn validate_coordinate(context: &str, latitude: f64, longitude: f64) -> ModelResult<()> {
    ensure(
        (-90.0..=90.0).contains(&latitude),
        format!("{}: latitude {} outside [-90, 90]", context, latitude),
    )?;
    ensure(
        (-180.0..=180.0).contains(&longitude),
        format!("{}: longitude {} outside [-180, 180]", context, longitude),
    )
}

fn validate_site(site: &SiteDescriptor) -> ModelResult<()> {
    ensure(!site.id.trim().is_empty(), "site id must not be empty")?;
    validate_coordinate(&site.id, site.latitude_deg, site.longitude_deg)?;
    ensure(
        (0.0..=360.0).contains(&site.azimuth_center_deg),
        format!(
            "{}: azimuth center {} outside [0, 360]",
            site.id, site.azimuth_center_deg
        ),
    )?;
    ensure_wedge(&format!("{}: coverage_angle_deg", site.id), site.coverage_angle_deg)
}

fn validate_profile(name: &str, profile: &TargetProfile) -> ModelResult<()> {
    ensure(!name.trim().is_empty(), "target profile name must not be empty")?;
    ensure_probability(&format!("{}: pd_modifier", name), profile.pd_modifier)?;
    ensure(
        profile.rcs_m2 >= 0.0 && profile.speed_mps >= 0.0 && profile.altitude_m.is_finite(),
        format!("{}: rcs and speed must not be negative", name),
    )
}

fn validate_route(route: &RouteDescriptor) -> ModelResult<()> {
    ensure(!route.name.trim().is_empty(), "route name must not be empty")?;
    for &(latitude, longitude) in &route.waypoints {
        validate_coordinate(&route.name, latitude, longitude)?;
    }
    Ok(())
}

fn validate_extent(extent: &GridExtent) -> ModelResult<()> {
    validate_coordinate("grid extent", extent.lat_min_deg, extent.lon_min_deg)?;
    validate_coordinate("grid extent", extent.lat_max_deg, extent.lon_max_deg)?;
    ensure(
        extent.lat_min_deg < extent.lat_max_deg && extent.lon_min_deg < extent.lon_max_deg,
        "grid extent minimums must be below maximums",
    )
}
