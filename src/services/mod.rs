pub mod category_service;
pub mod pizza_service;
pub mod user_service;
