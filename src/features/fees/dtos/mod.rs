mod fee_dto;

pub use fee_dto::*;
