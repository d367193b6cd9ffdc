use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::fees::{dtos as fees_dtos, handlers as fees_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::submit_report,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::update_report,
        reports_handlers::get_report_update,
        reports_handlers::find_report_by_hash,
        reports_handlers::get_summary,
        // Fees
        fees_handlers::get_balance,
    ),
    components(
        schemas(
            Meta,
            reports_models::ReportStatus,
            reports_models::ReportCategory,
            reports_models::WeatherImpact,
            reports_models::Location,
            reports_models::Boundaries,
            reports_dtos::SubmitReportDto,
            reports_dtos::UpdateReportDto,
            reports_dtos::SubmitReportResponseDto,
            reports_dtos::UpdateReportResponseDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportUpdateResponseDto,
            reports_dtos::ReportHashLookupDto,
            reports_dtos::RegistrySummaryDto,
            fees_dtos::BalanceResponseDto,
            ApiResponse<reports_dtos::SubmitReportResponseDto>,
            ApiResponse<reports_dtos::UpdateReportResponseDto>,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::ReportUpdateResponseDto>,
            ApiResponse<reports_dtos::ReportHashLookupDto>,
            ApiResponse<reports_dtos::RegistrySummaryDto>,
            ApiResponse<fees_dtos::BalanceResponseDto>,
        )
    ),
    tags(
        (name = "reports", description = "Crisis report submission, amendment and lookup"),
        (name = "fees", description = "Submission fee ledger"),
    ),
    security(
        ("caller_id" = [])
    ),
    info(
        title = "Crisis Registry API",
        version = "0.1.0",
        description = "API documentation for the crisis report registry",
    )
)]
pub struct ApiDoc;

/// Adds the configured gateway identity header as an API key scheme
pub struct SecurityAddon {
    pub identity_header: String,
}

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "caller_id",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                    self.identity_header.clone(),
                ))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
