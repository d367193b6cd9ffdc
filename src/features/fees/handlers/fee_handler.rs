use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::features::auth::CallerIdentity;
use crate::features::fees::dtos::BalanceResponseDto;
use crate::features::fees::services::FeeLedger;
use crate::shared::types::ApiResponse;

/// Get the caller's fee balance
#[utoipa::path(
    get,
    path = "/api/fees/balance",
    responses(
        (status = 200, description = "Current balance", body = ApiResponse<BalanceResponseDto>),
        (status = 401, description = "Missing caller identity"),
        (status = 502, description = "Ledger unavailable")
    ),
    tag = "fees"
)]
pub async fn get_balance(
    caller: CallerIdentity,
    State(ledger): State<Arc<dyn FeeLedger>>,
) -> Result<Json<ApiResponse<BalanceResponseDto>>> {
    let balance = ledger
        .balance(caller.as_str())
        .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        Some(BalanceResponseDto {
            payer: caller.to_string(),
            balance,
        }),
        None,
        None,
    )))
}
