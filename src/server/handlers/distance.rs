use axum::body::Bytes;
use axum::extract::{Extension, Json};
use serde_json::Value;

use crate::api::DynAPI;
use crate::entities::{DistanceEstimate, DistanceRequest};
use crate::error::{invalid_json_error, Error};

pub async fn count(
    Extension(api): Extension<DynAPI>,
    body: Bytes,
) -> Result<Json<DistanceEstimate>, Error> {
    let body: Value = serde_json::from_slice(&body).map_err(|_| invalid_json_error())?;
    let request = DistanceRequest::try_from(&body)?;

    let estimate = api.count_distance(request).await?;

    Ok(estimate.into())
}
