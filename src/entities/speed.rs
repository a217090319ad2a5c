use crate::error::{non_positive_speed_error, Error};

pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Travel speed in km/h. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speed(f64);

impl Speed {
    pub fn kmh(value: f64) -> Result<Self, Error> {
        // NaN fails this comparison too
        if !(value > 0.0) {
            return Err(non_positive_speed_error());
        }

        Ok(Self(value))
    }

    pub fn as_kmh(&self) -> f64 {
        self.0
    }

    pub fn hours_to_cover(&self, distance_km: f64) -> f64 {
        distance_km / self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED_KMH)
    }
}
