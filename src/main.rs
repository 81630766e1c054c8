use std::sync::Arc;

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use expense_service::config::Config;
use expense_service::expenses::{repositories::connect_store, ExpenseService};
use expense_service::middleware::RequestId;
use expense_service::modules;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting expense service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let store = connect_store(&config.database)
        .await
        .context("Failed to connect to the expense store")?;
    let service = Arc::new(ExpenseService::new(store));

    tracing::info!(backend = %config.database.backend, "Connected to the expense store");

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let app_service = service.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(app_service.clone()))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server running on http://{}", bind_address);

    let result = server.await;

    service.shutdown().await;
    tracing::info!("Server stopped");

    result.context("HTTP server error")
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "expense_service={},actix_web=info",
            config.app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.app.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
