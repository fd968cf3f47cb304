use actix_web::{App, HttpServer, middleware::from_fn, web};
use std::sync::Arc;
use tracing::info;

use phishdrill::api::services::{AppStartTime, admin::admin_routes, health::health_routes, tracking_routes};
use phishdrill::config::{get_config, init_config};
use phishdrill::middleware::AuthMiddleware;
use phishdrill::storage::SeaOrmStorage;
use phishdrill::system::logging::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();
    init_config();
    let config = get_config();

    // Guard must stay alive so buffered log lines get flushed
    let _log_guard = init_logging(config);

    let storage = SeaOrmStorage::new(&config.database.database_url, &config.database.backend)
        .await
        .map_err(|e| std::io::Error::other(e.format_simple()))?;
    let storage = Arc::new(storage);
    info!(
        "Using storage backend: {}",
        storage.get_backend_config().await.storage_type
    );

    let admin_prefix = config.routes.admin_prefix.clone();
    let health_prefix = config.routes.health_prefix.clone();

    if config.api.admin_token.is_empty() {
        info!("Admin API is disabled (ADMIN_TOKEN not set)");
    } else {
        info!("Admin API available at: {}", admin_prefix);
    }

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(admin_routes(&admin_prefix).wrap(from_fn(AuthMiddleware::admin_auth)))
            .service(health_routes(&health_prefix))
            .service(tracking_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}
