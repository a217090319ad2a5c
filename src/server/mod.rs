mod handlers;

use std::net::SocketAddr;

use axum::{extract::Extension, routing::post, Router};

use crate::api::DynAPI;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::distance;

pub fn app(api: DynAPI) -> Router {
    Router::new()
        .route("/count-distance", post(distance::count))
        .layer(Extension(api))
}

pub async fn serve(api: DynAPI, addr: SocketAddr) -> Result<(), Error> {
    let server = axum::Server::try_bind(&addr).map_err(unexpected_error)?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app(api).into_make_service())
        .await
        .map_err(unexpected_error)
}
