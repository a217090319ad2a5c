use super::Engine;

use async_trait::async_trait;

use crate::{
    api::DistanceAPI,
    entities::{DistanceEstimate, DistanceRequest},
    error::{unexpected_error, Error},
};

#[async_trait]
impl DistanceAPI for Engine {
    #[tracing::instrument(
        skip(self, request),
        fields(points = request.route.points().len(), speed = request.speed.as_kmh())
    )]
    async fn count_distance(&self, request: DistanceRequest) -> Result<DistanceEstimate, Error> {
        let DistanceRequest { route, speed } = request;

        let workers = match &self.workers {
            Some(workers) => workers,
            None => return Ok(route.estimate(speed)),
        };

        let permit = workers
            .clone()
            .acquire_owned()
            .await
            .map_err(unexpected_error)?;

        // the permit lives as long as the blocking task, even if this future is dropped
        let estimate = tokio::task::spawn_blocking(move || {
            let estimate = route.estimate(speed);
            drop(permit);
            estimate
        })
        .await?;

        Ok(estimate)
    }
}
