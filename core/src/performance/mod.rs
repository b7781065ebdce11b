pub mod accuracy;
pub mod detection;
pub mod summary;

pub use accuracy::{track_accuracy, TrackAccuracy};
pub use detection::{
    detection_probability, max_detection_range, probability_curve, CurvePoint,
    MAX_RANGE_SAMPLES, RANGE_DECAY_AT_MAX, RANGE_SCAN_STEP_KM,
};
pub use summary::{PerformanceSummary, DEFAULT_PD_THRESHOLD};
