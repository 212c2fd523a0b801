pub mod pizza;
pub mod user;
