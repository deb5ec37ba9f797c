use std::{process, sync::Arc};

use axum::Server;

use todo_registry_api::{
    config::Config,
    observability::init_tracing,
    route::{cors_layer, create_router},
    AppState,
};

// Entry point of the application
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let cors = match cors_layer(config.cors_allowed_origin.as_deref()) {
        Ok(cors) => cors,
        Err(err) => {
            tracing::error!(error = %err, "invalid CORS_ALLOWED_ORIGIN");
            process::exit(1);
        }
    };

    let app_state = Arc::new(AppState::new());
    let app = create_router(app_state).layer(cors);

    let addr = config.addr();
    tracing::info!(%addr, "server started");

    if let Err(err) = Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "server error");
        process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
