use serde_json::Value;

use crate::entities::{Coordinates, Route, Speed};
use crate::error::{
    coordinate_shape_error, coordinate_value_error, missing_field_error, speed_conversion_error,
    too_few_points_error, Error,
};

/// A validated `POST /count-distance` body.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceRequest {
    pub route: Route,
    pub speed: Speed,
}

impl TryFrom<&Value> for DistanceRequest {
    type Error = Error;

    /// Checks run in a fixed order and stop at the first failure.
    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let raw_points = body
            .get("coordinates")
            .ok_or_else(|| missing_field_error("coordinates"))?;

        let raw_points = match raw_points {
            Value::Array(points) if points.len() >= 2 => points,
            _ => return Err(too_few_points_error()),
        };

        let points = raw_points
            .iter()
            .enumerate()
            .map(|(index, raw)| parse_coordinates(index, raw))
            .collect::<Result<Vec<_>, _>>()?;

        let speed = match body.get("speed") {
            Some(raw) => {
                let kmh = as_float(raw).ok_or_else(|| speed_conversion_error(raw))?;
                Speed::kmh(kmh)?
            }
            None => Speed::default(),
        };

        Ok(Self {
            route: Route::new(points)?,
            speed,
        })
    }
}

fn parse_coordinates(index: usize, raw: &Value) -> Result<Coordinates, Error> {
    let (lat, lon) = match raw {
        Value::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
        _ => return Err(coordinate_shape_error(index)),
    };

    match (as_float(lat), as_float(lon)) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
        _ => Err(coordinate_value_error(index)),
    }
}

/// Numbers, booleans and numeric strings convert; everything else does not.
fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reject(body: Value) -> String {
        DistanceRequest::try_from(&body).unwrap_err().message
    }

    #[test]
    fn accepts_a_minimal_body() {
        let request = DistanceRequest::try_from(&json!({
            "coordinates": [[0, 0], [0, 1]]
        }))
        .unwrap();

        assert_eq!(
            request.route.points(),
            &[Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0)]
        );
        assert_eq!(request.speed, Speed::default());
    }

    #[test]
    fn missing_coordinates() {
        assert_eq!(
            reject(json!({ "speed": 10 })),
            "Missing required field: coordinates"
        );
        assert_eq!(
            reject(json!([[0, 0], [0, 1]])),
            "Missing required field: coordinates"
        );
        assert_eq!(reject(json!(42)), "Missing required field: coordinates");
    }

    #[test]
    fn coordinates_must_be_a_long_enough_array() {
        let message = "Coordinates must be an array with at least 2 points";

        assert_eq!(reject(json!({ "coordinates": [[1, 2]] })), message);
        assert_eq!(reject(json!({ "coordinates": [] })), message);
        assert_eq!(reject(json!({ "coordinates": "0,0;0,1" })), message);
        assert_eq!(reject(json!({ "coordinates": null })), message);
    }

    #[test]
    fn each_point_must_be_a_pair() {
        assert_eq!(
            reject(json!({ "coordinates": [[1, 2], [1, 2, 3]] })),
            "Coordinate 1 must be [lat, lon]"
        );
        assert_eq!(
            reject(json!({ "coordinates": [{ "lat": 1, "lon": 2 }, [1, 2]] })),
            "Coordinate 0 must be [lat, lon]"
        );
    }

    #[test]
    fn each_point_must_be_numeric() {
        assert_eq!(
            reject(json!({ "coordinates": [[1, 2], ["a", 3]] })),
            "Coordinate 1 must contain numeric values"
        );
        assert_eq!(
            reject(json!({ "coordinates": [[null, 2], [1, 3]] })),
            "Coordinate 0 must contain numeric values"
        );
    }

    #[test]
    fn first_failing_point_wins() {
        assert_eq!(
            reject(json!({ "coordinates": [[1, 2], ["x", 3], [1]] })),
            "Coordinate 1 must contain numeric values"
        );
        assert_eq!(
            reject(json!({ "coordinates": [[1, 2], [1], ["x", 3]] })),
            "Coordinate 1 must be [lat, lon]"
        );
    }

    #[test]
    fn point_errors_come_before_speed_errors() {
        assert_eq!(
            reject(json!({ "coordinates": [[1, 2], ["x", 3]], "speed": 0 })),
            "Coordinate 1 must contain numeric values"
        );
    }

    #[test]
    fn numeric_strings_and_booleans_convert() {
        let request = DistanceRequest::try_from(&json!({
            "coordinates": [[" 12.5 ", "1e1"], [true, false]],
            "speed": "20"
        }))
        .unwrap();

        assert_eq!(
            request.route.points(),
            &[Coordinates::new(12.5, 10.0), Coordinates::new(1.0, 0.0)]
        );
        assert_eq!(request.speed.as_kmh(), 20.0);
    }

    #[test]
    fn speed_must_be_positive() {
        for speed in [json!(0), json!(-5), json!("-1"), json!(false), json!("nan")] {
            assert_eq!(
                reject(json!({ "coordinates": [[0, 0], [0, 1]], "speed": speed })),
                "Speed must be greater than 0"
            );
        }
    }

    #[test]
    fn unconvertible_speed_is_an_internal_error() {
        let err = DistanceRequest::try_from(&json!({
            "coordinates": [[0, 0], [0, 1]],
            "speed": "fast"
        }))
        .unwrap_err();

        assert!(err.is_internal());
        assert_eq!(
            err.message,
            "Speed could not be converted to a number: \"fast\""
        );

        let err = DistanceRequest::try_from(&json!({
            "coordinates": [[0, 0], [0, 1]],
            "speed": null
        }))
        .unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn non_finite_strings_are_numeric() {
        let request = DistanceRequest::try_from(&json!({
            "coordinates": [["nan", "inf"], ["-Infinity", 0]]
        }))
        .unwrap();

        let points = request.route.points();
        assert!(points[0].latitude.is_nan());
        assert_eq!(points[0].longitude, f64::INFINITY);
        assert_eq!(points[1].latitude, f64::NEG_INFINITY);
    }

    #[test]
    fn as_float_conversions() {
        assert_eq!(as_float(&json!(3)), Some(3.0));
        assert_eq!(as_float(&json!(-2.5)), Some(-2.5));
        assert_eq!(as_float(&json!("4")), Some(4.0));
        assert_eq!(as_float(&json!("")), None);
        assert_eq!(as_float(&json!([1])), None);
        assert_eq!(as_float(&json!({})), None);
    }
}
