use crate::entities::{Coordinates, DistanceEstimate, Speed};
use crate::error::{too_few_points_error, Error};

/// An ordered path of at least two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    points: Vec<Coordinates>,
}

impl Route {
    pub fn new(points: Vec<Coordinates>) -> Result<Self, Error> {
        if points.len() < 2 {
            return Err(too_few_points_error());
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.points
    }

    /// Length of each leg between consecutive points, in kilometres.
    pub fn segments(&self) -> impl Iterator<Item = f64> + '_ {
        self.points
            .windows(2)
            .map(|pair| pair[0].haversine_distance(&pair[1]))
    }

    pub fn distance_km(&self) -> f64 {
        self.segments().sum()
    }

    #[tracing::instrument(skip(self), fields(points = self.points.len()))]
    pub fn estimate(&self, speed: Speed) -> DistanceEstimate {
        let distance_km = self.distance_km();
        let time_hours = speed.hours_to_cover(distance_km);

        DistanceEstimate::rounded(distance_km, time_hours)
    }
}
