pub mod angle;
pub mod geodesy;
pub mod sampling;

pub use angle::AngleHelper;
pub use geodesy::{GeoHelper, EARTH_RADIUS_KM};
pub use sampling::SamplingHelper;
