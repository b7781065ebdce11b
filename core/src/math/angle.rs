pub struct AngleHelper;

impl AngleHelper {
    /// Smallest separation between two compass angles, in degrees within [0, 180].
    ///
    /// Both inputs are expected in [0, 360]. The difference is folded once
    /// through 360 so wedges straddling north compare correctly.
    pub fn separation_deg(a: f64, b: f64) -> f64 {
        let diff = (a - b).abs();
        if diff > 180.0 {
            360.0 - diff
        } else {
            diff
        }
    }

    /// Brings any finite angle into [0, 360).
    pub fn normalize_deg(angle: f64) -> f64 {
        let wrapped = angle.rem_euclid(360.0);
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }
}
