pub mod pizza_dto;
pub mod user_dto;
