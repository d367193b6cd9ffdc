use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::CallerIdentity;
use crate::features::reports::dtos::{
    RegistrySummaryDto, ReportHashLookupDto, ReportResponseDto, ReportUpdateResponseDto,
    SubmitReportDto, SubmitReportResponseDto, UpdateReportDto, UpdateReportResponseDto,
};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
}

/// Submit a new crisis report
///
/// Charges the submission fee to the caller once every rule has passed.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = SubmitReportDto,
    responses(
        (status = 201, description = "Report accepted", body = ApiResponse<SubmitReportResponseDto>),
        (status = 400, description = "Field rule violated (see code)"),
        (status = 401, description = "Missing caller identity"),
        (status = 402, description = "Submission fee not paid (code 122)"),
        (status = 409, description = "Hash already exists (105) or capacity exceeded (114)")
    ),
    tag = "reports"
)]
pub async fn submit_report(
    caller: CallerIdentity,
    State(state): State<ReportState>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubmitReportResponseDto>>)> {
    let id = state.report_service.submit(&caller, dto.into())?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(SubmitReportResponseDto { id }),
            Some("Report submitted".to_string()),
            None,
        )),
    ))
}

/// List reports ordered by id
#[utoipa::path(
    get,
    path = "/api/reports",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Missing caller identity")
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let (reports, total) = state.report_service.list(&query)?;
    let dtos: Vec<ReportResponseDto> = reports
        .into_iter()
        .map(|(id, r)| ReportResponseDto::new(id, r))
        .collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = u64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 401, description = "Missing caller identity"),
        (status = 404, description = "Report not found (code 107)")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<ReportState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = state.report_service.get(id)?;
    Ok(Json(ApiResponse::success(
        Some(ReportResponseDto::new(id, report)),
        None,
        None,
    )))
}

/// Amend hash, description and severity of a report (original reporter only)
#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    params(
        ("id" = u64, Path, description = "Report ID")
    ),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Report updated", body = ApiResponse<UpdateReportResponseDto>),
        (status = 400, description = "Field rule violated (see code)"),
        (status = 401, description = "Missing caller identity"),
        (status = 403, description = "Caller is not the reporter (code 100)"),
        (status = 404, description = "Report not found (code 107)"),
        (status = 409, description = "Hash belongs to another report (code 105)")
    ),
    tag = "reports"
)]
pub async fn update_report(
    caller: CallerIdentity,
    State(state): State<ReportState>,
    Path(id): Path<u64>,
    AppJson(dto): AppJson<UpdateReportDto>,
) -> Result<Json<ApiResponse<UpdateReportResponseDto>>> {
    let updated = state.report_service.update(&caller, id, dto.into())?;
    Ok(Json(ApiResponse::success(
        Some(UpdateReportResponseDto { updated }),
        Some("Report updated".to_string()),
        None,
    )))
}

/// Get the latest amendment of a report
#[utoipa::path(
    get,
    path = "/api/reports/{id}/update",
    params(
        ("id" = u64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Latest update, null if never amended", body = ApiResponse<ReportUpdateResponseDto>),
        (status = 401, description = "Missing caller identity"),
        (status = 404, description = "Report not found (code 107)")
    ),
    tag = "reports"
)]
pub async fn get_report_update(
    State(state): State<ReportState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<ReportUpdateResponseDto>>> {
    let record = state.report_service.latest_update(id)?;
    Ok(Json(ApiResponse::success(
        record.map(ReportUpdateResponseDto::from),
        None,
        None,
    )))
}

/// Resolve a content hash to its report id
#[utoipa::path(
    get,
    path = "/api/reports/by-hash/{hash}",
    params(
        ("hash" = String, Path, description = "64-character hex content hash")
    ),
    responses(
        (status = 200, description = "Hash is active", body = ApiResponse<ReportHashLookupDto>),
        (status = 401, description = "Missing caller identity"),
        (status = 404, description = "No report carries this hash (code 107)")
    ),
    tag = "reports"
)]
pub async fn find_report_by_hash(
    State(state): State<ReportState>,
    Path(hash): Path<String>,
) -> Result<Json<ApiResponse<ReportHashLookupDto>>> {
    let id = state.report_service.find_by_hash(&hash)?;
    Ok(Json(ApiResponse::success(
        Some(ReportHashLookupDto { id, hash }),
        None,
        None,
    )))
}

/// Registry counters
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    responses(
        (status = 200, description = "Registry summary", body = ApiResponse<RegistrySummaryDto>),
        (status = 401, description = "Missing caller identity")
    ),
    tag = "reports"
)]
pub async fn get_summary(
    State(state): State<ReportState>,
) -> Result<Json<ApiResponse<RegistrySummaryDto>>> {
    let summary = state.report_service.summary()?;
    Ok(Json(ApiResponse::success(Some(summary.into()), None, None)))
}
