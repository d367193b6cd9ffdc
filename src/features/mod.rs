pub mod auth;
pub mod fees;
pub mod reports;
