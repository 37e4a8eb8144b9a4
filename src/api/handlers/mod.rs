pub mod areas;
pub mod auth;
pub mod health;
