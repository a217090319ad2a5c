mod coordinates;
mod estimate;
mod request;
mod route;
mod speed;

pub use coordinates::{Coordinates, EARTH_RADIUS_KM};
pub use estimate::{round_to, DistanceEstimate};
pub use request::DistanceRequest;
pub use route::Route;
pub use speed::{Speed, DEFAULT_SPEED_KMH};
