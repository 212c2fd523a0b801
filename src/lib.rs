pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::{
    category_service::CategoryService, pizza_service::PizzaService, user_service::UserService,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub category_service: CategoryService,
    pub user_service: UserService,
    pub pizza_service: PizzaService,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        let category_service = CategoryService::new(pool.clone());
        let user_service = UserService::new(pool.clone());
        let pizza_service = PizzaService::new(pool.clone());

        Self {
            pool,
            config: Arc::new(config),
            category_service,
            user_service,
            pizza_service,
        }
    }
}
