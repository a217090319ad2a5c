use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{DistanceEstimate, DistanceRequest};
use crate::error::Error;

#[async_trait]
pub trait DistanceAPI {
    async fn count_distance(&self, request: DistanceRequest) -> Result<DistanceEstimate, Error>;
}

pub trait API: DistanceAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
