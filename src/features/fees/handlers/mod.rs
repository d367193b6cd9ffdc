pub mod fee_handler;

pub use fee_handler::*;
