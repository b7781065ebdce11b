use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::info;
use othrcore::performance::{
    detection_probability, max_detection_range, probability_curve, track_accuracy, CurvePoint,
    PerformanceSummary, TrackAccuracy,
};
use othrcore::{Condition, CoverageGrid};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CoverageReport {
    pub resolution_deg: f64,
    pub lat_samples: Vec<f64>,
    pub lon_samples: Vec<f64>,
    pub sites: Vec<String>,
    pub covered_fraction: f64,
    pub max_count: u32,
    /// Cells per coverage depth, index = number of covering sites
    pub histogram: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<u32>>>,
}

#[derive(Debug, Serialize)]
pub struct DetectionReport {
    pub profile: String,
    pub range_km: f64,
    pub condition: Condition,
    pub pd: f64,
    pub accuracy: TrackAccuracy,
}

#[derive(Debug, Serialize)]
pub struct RangeReport {
    pub profile: String,
    pub condition: Condition,
    pub pd_threshold: f64,
    pub max_range_km: f64,
}

#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub profile: String,
    pub condition: Condition,
    pub step_km: f64,
    pub points: Vec<CurvePoint>,
}

/// Runs core operations against one workflow configuration.
#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn summary(&self, pd_threshold: Option<f64>) -> anyhow::Result<PerformanceSummary> {
        let threshold = pd_threshold.unwrap_or(self.config.pd_threshold);
        PerformanceSummary::build_with_threshold(&self.config.system, threshold)
            .context("building performance summary")
    }

    pub fn coverage(
        &self,
        resolution_deg: Option<f64>,
        include_rows: bool,
    ) -> anyhow::Result<CoverageReport> {
        let resolution_deg = resolution_deg.unwrap_or_else(|| self.config.grid_resolution());
        let grid = CoverageGrid::build(&self.config.system, resolution_deg)
            .context("building coverage grid")?;
        info!(
            "coverage grid: {:.1}% of cells covered, deepest overlap {}",
            grid.covered_fraction() * 100.0,
            grid.max_count()
        );

        let rows = include_rows.then(|| {
            grid.counts()
                .rows()
                .into_iter()
                .map(|row| row.to_vec())
                .collect()
        });

        Ok(CoverageReport {
            resolution_deg,
            lat_samples: grid.lat_samples().to_vec(),
            lon_samples: grid.lon_samples().to_vec(),
            sites: self
                .config
                .system
                .sites()
                .iter()
                .map(|site| site.id.clone())
                .collect(),
            covered_fraction: grid.covered_fraction(),
            max_count: grid.max_count(),
            histogram: grid.histogram(),
            rows,
        })
    }

    pub fn detection(
        &self,
        profile: &str,
        range_km: f64,
        condition: Condition,
    ) -> anyhow::Result<DetectionReport> {
        let system = &self.config.system;
        let pd = detection_probability(system, profile, range_km, condition)
            .with_context(|| format!("computing Pd for {}", profile))?;
        let accuracy = track_accuracy(system, range_km).context("computing track accuracy")?;
        Ok(DetectionReport {
            profile: profile.to_string(),
            range_km,
            condition,
            pd,
            accuracy,
        })
    }

    pub fn max_range(
        &self,
        profile: &str,
        pd_threshold: Option<f64>,
        condition: Condition,
    ) -> anyhow::Result<RangeReport> {
        let pd_threshold = pd_threshold.unwrap_or(self.config.pd_threshold);
        let max_range_km =
            max_detection_range(&self.config.system, profile, pd_threshold, condition)
                .with_context(|| format!("scanning detection range for {}", profile))?;
        Ok(RangeReport {
            profile: profile.to_string(),
            condition,
            pd_threshold,
            max_range_km,
        })
    }

    pub fn accuracy(&self, range_km: f64) -> anyhow::Result<TrackAccuracy> {
        track_accuracy(&self.config.system, range_km).context("computing track accuracy")
    }

    pub fn curve(
        &self,
        profile: &str,
        condition: Condition,
        step_km: Option<f64>,
    ) -> anyhow::Result<CurveReport> {
        let step_km = step_km.unwrap_or(self.config.curve_step_km);
        let points = probability_curve(&self.config.system, profile, condition, step_km)
            .with_context(|| format!("sampling Pd curve for {}", profile))?;
        Ok(CurveReport {
            profile: profile.to_string(),
            condition,
            step_km,
            points,
        })
    }
}
