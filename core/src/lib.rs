//! Coverage-geometry and detection-performance core for the Arctic OTHR model.
//!
//! The spatial path runs great-circle geometry through per-site range/azimuth
//! gates into a multi-site coverage grid. The performance path turns a
//! validated [`SystemConfiguration`] into detection probabilities, track
//! accuracy estimates and a structured summary. Everything here is a pure
//! function of its inputs; rendering and persistence live with the callers.

pub mod config;
pub mod coverage;
pub mod math;
pub mod performance;
pub mod prelude;

pub use config::{
    ConfigurationDraft, GridExtent, RadarParameters, RouteDescriptor, SiteDescriptor,
    SystemConfiguration, TargetProfile,
};
pub use coverage::{CoverageGate, CoverageGrid, CoverageResult};
pub use performance::{CurvePoint, PerformanceSummary, TrackAccuracy};
pub use prelude::{Condition, ModelError, ModelResult};
