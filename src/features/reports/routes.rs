use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Every route needs a caller identity; the identity middleware is applied
/// by the caller.
pub fn routes(report_service: Arc<ReportService>) -> Router {
    let state = ReportState { report_service };

    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::submit_report),
        )
        .route("/api/reports/summary", get(handlers::get_summary))
        .route(
            "/api/reports/by-hash/{hash}",
            get(handlers::find_report_by_hash),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::get_report).put(handlers::update_report),
        )
        .route("/api/reports/{id}/update", get(handlers::get_report_update))
        .with_state(state)
}
