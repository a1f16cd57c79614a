use std::sync::Arc;

use actix_web::HttpServer;
use anyhow::Context;
use tracing::info;

use bw_api::app::create_app;
use bw_api::config::{build_pipeline, init_tracing, load_config};
use bw_api::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        disclosure = %config.disclosure_mode(),
        "Starting Bulwark API server"
    );

    let pipeline = Arc::new(build_pipeline(&config));
    let server_config = config.server.clone();
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(Arc::clone(&pipeline), &server_config, routes::configure)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
