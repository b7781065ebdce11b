use crate::prelude::{ModelError, ModelResult};

/// Half-open `[start, stop)` sampling shared by grid axes and range scans.
pub struct SamplingHelper;

impl SamplingHelper {
    /// Number of samples `start + i * step` lying below `stop`.
    ///
    /// Fails instead of allocating when the count would exceed `limit`.
    pub fn count(start: f64, stop: f64, step: f64, limit: usize) -> ModelResult<usize> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "sampling step must be positive, got {}",
                step
            )));
        }
        let raw = ((stop - start) / step).ceil().max(0.0);
        if !raw.is_finite() || raw > limit as f64 {
            return Err(ModelError::InvalidInput(format!(
                "step {} over [{}, {}) needs more than {} samples",
                step, start, stop, limit
            )));
        }
        Ok(raw as usize)
    }

    pub fn samples(start: f64, step: f64, count: usize) -> Vec<f64> {
        (0..count).map(|index| start + index as f64 * step).collect()
    }
}
