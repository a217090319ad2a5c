use std::process;
use std::sync::Arc;

use clap::Parser;

use geodist::api::DynAPI;
use geodist::config::Config;
use geodist::engine::Engine;
use geodist::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    config.log();

    let api = Arc::new(Engine::new(config.workers)) as DynAPI;

    if let Err(err) = serve(api, config.addr()).await {
        tracing::error!("{}", err);
        process::exit(1);
    }
}
