use crate::config::AppConfig;
use crate::error::Result;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;

pub fn connect_options(config: &AppConfig) -> Result<PgConnectOptions> {
    let dsn = config.db_dsn_for_environment()?;
    let options = PgConnectOptions::from_str(&dsn)?;
    let options = if config.db_echo {
        options.log_statements(log::LevelFilter::Info)
    } else {
        options.disable_statement_logging()
    };
    Ok(options)
}

fn pool_options(config: &AppConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .min_connections(config.pool_size)
        .max_connections(config.max_connections().max(1))
        .acquire_timeout(Duration::from_secs(30))
}

pub async fn create_pool(config: &AppConfig) -> Result<PgPool> {
    let pool = pool_options(config)
        .connect_with(connect_options(config)?)
        .await?;
    Ok(pool)
}

/// Builds the pool without opening a connection; the first query connects.
pub fn create_lazy_pool(config: &AppConfig) -> Result<PgPool> {
    Ok(pool_options(config).connect_lazy_with(connect_options(config)?))
}
