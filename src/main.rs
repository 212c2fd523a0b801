use pizza_backend::{
    config::AppConfig, database::migrations, database::pool::create_pool,
    logging::LogSettings, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let log_settings = LogSettings::from_config(&config);
    log_settings.install()?;
    info!(
        level = log_settings.level.as_str(),
        title = %config.app_title,
        version = %config.version,
        "Starting"
    );

    let pool = create_pool(&config).await?;
    migrations::upgrade(&pool).await?;

    let addr: SocketAddr = config.server_address.parse()?;
    let app = routes::build_router(AppState::new(pool, config));

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
