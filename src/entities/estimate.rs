use serde::Serialize;

/// The response payload of a distance calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DistanceEstimate {
    pub distance_km: f64,
    pub time_hours: f64,
}

impl DistanceEstimate {
    /// Builds the payload from full-precision values, rounding distance to
    /// 2 places and time to 4.
    pub fn rounded(distance_km: f64, time_hours: f64) -> Self {
        Self {
            distance_km: round_to(distance_km, 2),
            time_hours: round_to(time_hours, 4),
        }
    }
}

/// Rounds the exact binary value to `places` decimals, ties to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
