use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponseDto {
    pub payer: String,
    pub balance: u64,
}
