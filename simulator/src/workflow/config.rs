use anyhow::Context;
use othrcore::config::SystemConfiguration;
use othrcore::performance::{DEFAULT_PD_THRESHOLD, RANGE_SCAN_STEP_KM};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Run settings loaded from YAML; anything omitted falls back to the baseline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub system: SystemConfiguration,
    /// Overrides the configuration's own grid resolution when set
    pub grid_resolution_deg: Option<f64>,
    pub pd_threshold: f64,
    pub curve_step_km: f64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            system: SystemConfiguration::baseline(),
            grid_resolution_deg: None,
            pd_threshold: DEFAULT_PD_THRESHOLD,
            curve_step_km: RANGE_SCAN_STEP_KM,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn grid_resolution(&self) -> f64 {
        self.grid_resolution_deg
            .unwrap_or_else(|| self.system.grid_resolution_deg())
    }
}
