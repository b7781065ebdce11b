use crate::config::SystemConfiguration;
use crate::coverage::gate::CoverageGate;
use crate::math::SamplingHelper;
use crate::prelude::{ModelError, ModelResult};
use log::debug;
use ndarray::Array2;

/// Upper bound on samples along one grid axis.
pub const MAX_AXIS_SAMPLES: usize = 100_000;

/// Upper bound on gate evaluations (cells x sites) for one grid build.
pub const MAX_GRID_EVALUATIONS: usize = 50_000_000;

/// Per-cell count of sites covering a rectangular lat/lon grid.
///
/// Counts are indexed `[lat_index, lon_index]` and never change after
/// construction; build a new grid to see a different configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageGrid {
    lat_samples: Vec<f64>,
    lon_samples: Vec<f64>,
    counts: Array2<u32>,
    site_count: usize,
}

impl CoverageGrid {
    /// Samples the configured extent every `resolution_deg` degrees.
    ///
    /// Resolutions so fine that the build would exceed [`MAX_AXIS_SAMPLES`]
    /// per axis or [`MAX_GRID_EVALUATIONS`] gate evaluations are rejected.
    pub fn build(config: &SystemConfiguration, resolution_deg: f64) -> ModelResult<Self> {
        if !resolution_deg.is_finite() || resolution_deg <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "grid resolution must be positive, got {}",
                resolution_deg
            )));
        }

        let extent = config.grid_extent();
        let sites = config.sites();
        let lat_count = SamplingHelper::count(
            extent.lat_min_deg,
            extent.lat_max_deg,
            resolution_deg,
            MAX_AXIS_SAMPLES,
        )?;
        let lon_count = SamplingHelper::count(
            extent.lon_min_deg,
            extent.lon_max_deg,
            resolution_deg,
            MAX_AXIS_SAMPLES,
        )?;
        let evaluations = lat_count
            .checked_mul(lon_count)
            .and_then(|cells| cells.checked_mul(sites.len()))
            .filter(|&total| total <= MAX_GRID_EVALUATIONS)
            .ok_or_else(|| {
                ModelError::InvalidInput(format!(
                    "{}x{} grid over {} sites exceeds {} gate evaluations",
                    lat_count,
                    lon_count,
                    sites.len(),
                    MAX_GRID_EVALUATIONS
                ))
            })?;

        let lat_samples = SamplingHelper::samples(extent.lat_min_deg, resolution_deg, lat_count);
        let lon_samples = SamplingHelper::samples(extent.lon_min_deg, resolution_deg, lon_count);
        let gate = CoverageGate::from_config(config);
        let mut counts = Array2::<u32>::zeros((lat_samples.len(), lon_samples.len()));

        for (i, &lat) in lat_samples.iter().enumerate() {
            for (j, &lon) in lon_samples.iter().enumerate() {
                let covering = sites
                    .iter()
                    .filter(|site| gate.evaluate(site, lat, lon).in_coverage)
                    .count();
                counts[[i, j]] = covering as u32;
            }
        }

        debug!(
            "coverage grid {}x{} at {} deg across {} sites ({} evaluations)",
            lat_samples.len(),
            lon_samples.len(),
            resolution_deg,
            sites.len(),
            evaluations
        );

        Ok(Self {
            lat_samples,
            lon_samples,
            counts,
            site_count: sites.len(),
        })
    }

    /// Builds at the configuration's default resolution.
    pub fn build_default(config: &SystemConfiguration) -> ModelResult<Self> {
        Self::build(config, config.grid_resolution_deg())
    }

    pub fn lat_samples(&self) -> &[f64] {
        &self.lat_samples
    }

    pub fn lon_samples(&self) -> &[f64] {
        &self.lon_samples
    }

    pub fn counts(&self) -> &Array2<u32> {
        &self.counts
    }

    pub fn site_count(&self) -> usize {
        self.site_count
    }

    pub fn count_at(&self, lat_index: usize, lon_index: usize) -> Option<u32> {
        self.counts.get([lat_index, lon_index]).copied()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Fraction of cells seen by at least one site.
    pub fn covered_fraction(&self) -> f64 {
        let total = self.counts.len();
        if total == 0 {
            return 0.0;
        }
        let covered = self.counts.iter().filter(|&&count| count > 0).count();
        covered as f64 / total as f64
    }

    /// Number of cells at each coverage depth, from 0 up to the site count.
    pub fn histogram(&self) -> Vec<usize> {
        let mut bins = vec![0usize; self.site_count + 1];
        for &count in self.counts.iter() {
            if let Some(bin) = bins.get_mut(count as usize) {
                *bin += 1;
            }
        }
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigurationDraft, SiteDescriptor};

    #[test]
    fn axis_samples_exclude_upper_bound() {
        let grid = CoverageGrid::build(&SystemConfiguration::baseline(), 5.0).unwrap();
        assert_eq!(grid.lat_samples(), &[50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0]);
        assert_eq!(grid.lon_samples().last(), Some(&-65.0));
    }

    #[test]
    fn microscopic_resolution_is_rejected_before_allocating() {
        let config = SystemConfiguration::baseline();
        for resolution in [1e-12, 1e-300, f64::MIN_POSITIVE] {
            assert!(matches!(
                CoverageGrid::build(&config, resolution),
                Err(ModelError::InvalidInput(_))
            ));
        }
        // 350 x 1200 cells x 3 sites stays within budget
        assert!(CoverageGrid::build(&config, 0.1).is_ok());
    }

    #[test]
    fn tiny_default_resolution_fails_on_build() {
        let mut draft = ConfigurationDraft::default();
        draft.grid_resolution_deg = 1e-9;
        let config = draft.build().unwrap();
        assert!(matches!(
            CoverageGrid::build_default(&config),
            Err(ModelError::InvalidInput(_))
        ));
    }

    #[test]
    fn baseline_grid_has_expected_shape() {
        let config = SystemConfiguration::baseline();
        let grid = CoverageGrid::build(&config, 2.0).unwrap();
        assert_eq!(grid.lat_samples().len(), 18);
        assert_eq!(grid.lon_samples().len(), 60);
        assert_eq!(grid.counts().dim(), (18, 60));
        assert_eq!(grid.site_count(), 3);
    }

    #[test]
    fn cell_counts_match_per_site_gate() {
        let config = SystemConfiguration::baseline();
        let grid = CoverageGrid::build(&config, 5.0).unwrap();
        let gate = CoverageGate::from_config(&config);

        for (i, &lat) in grid.lat_samples().iter().enumerate() {
            for (j, &lon) in grid.lon_samples().iter().enumerate() {
                let expected = config
                    .sites()
                    .iter()
                    .filter(|site| gate.evaluate(site, lat, lon).in_coverage)
                    .count() as u32;
                assert_eq!(grid.count_at(i, j), Some(expected));
            }
        }
        assert!(grid.max_count() as usize <= config.sites().len());
    }

    #[test]
    fn baseline_network_covers_part_of_the_arctic() {
        let grid = CoverageGrid::build_default(&SystemConfiguration::baseline()).unwrap();
        let fraction = grid.covered_fraction();
        assert!(fraction > 0.0 && fraction < 1.0, "fraction {}", fraction);
        assert!(grid.max_count() >= 2);

        let histogram = grid.histogram();
        assert_eq!(histogram.len(), 4);
        assert_eq!(histogram.iter().sum::<usize>(), grid.counts().len());
    }

    #[test]
    fn omnidirectional_site_without_skip_zone_covers_its_ring() {
        let mut draft = ConfigurationDraft::default();
        draft.parameters.min_range_km = 0.0;
        draft.sites = vec![SiteDescriptor::new("omni", 70.0, -120.0, 0.0, 360.0)];
        let config = draft.build().unwrap();
        let grid = CoverageGrid::build(&config, 1.0).unwrap();

        let lat_index = grid.lat_samples().iter().position(|&lat| lat == 70.0).unwrap();
        let lon_index = grid.lon_samples().iter().position(|&lon| lon == -120.0).unwrap();
        assert_eq!(grid.count_at(lat_index, lon_index), Some(1));
        assert_eq!(grid.max_count(), 1);
    }

    #[test]
    fn non_positive_resolution_is_rejected() {
        let config = SystemConfiguration::baseline();
        for resolution in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                CoverageGrid::build(&config, resolution),
                Err(ModelError::InvalidInput(_))
            ));
        }
    }
}
