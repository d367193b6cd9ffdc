use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::{
    Boundaries, CreateReport, Location, Report, ReportCategory, ReportStatus, ReportUpdate,
    UpdateReport, WeatherImpact,
};
use crate::features::reports::services::RegistrySummary;

/// Request DTO for submitting a report
///
/// Every field is checked by the registry rule chain, in order; integers are
/// signed and enumerations are strings so bad values get a registry code
/// instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReportDto {
    /// Content hash, 64 hex characters
    pub hash: String,
    pub description: String,
    /// 1-10
    pub severity: i64,
    pub location: Location,
    pub boundaries: Boundaries,
    /// natural-disaster | conflict | public-emergency | health-crisis
    pub category: String,
    /// 1-10 distinct 64-character hex hashes
    pub evidence_hashes: Vec<String>,
    /// 1-5
    pub impact_level: i64,
    /// none | mild | severe
    pub weather_impact: String,
    pub affected_population: i64,
    /// 1-3
    pub emergency_level: i64,
}

impl From<SubmitReportDto> for CreateReport {
    fn from(dto: SubmitReportDto) -> Self {
        Self {
            hash: dto.hash,
            description: dto.description,
            severity: dto.severity,
            location: dto.location,
            boundaries: dto.boundaries,
            category: dto.category,
            evidence_hashes: dto.evidence_hashes,
            impact_level: dto.impact_level,
            weather_impact: dto.weather_impact,
            affected_population: dto.affected_population,
            emergency_level: dto.emergency_level,
        }
    }
}

/// Request DTO for amending a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportDto {
    pub hash: String,
    pub description: String,
    pub severity: i64,
}

impl From<UpdateReportDto> for UpdateReport {
    fn from(dto: UpdateReportDto) -> Self {
        Self {
            hash: dto.hash,
            description: dto.description,
            severity: dto.severity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReportResponseDto {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportResponseDto {
    pub updated: bool,
}

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: u64,
    pub hash: String,
    pub description: String,
    pub severity: u8,
    pub location: Location,
    pub boundaries: Boundaries,
    pub timestamp: u64,
    pub reporter: String,
    pub category: ReportCategory,
    pub evidence_hashes: Vec<String>,
    pub impact_level: u8,
    pub weather_impact: WeatherImpact,
    pub affected_population: u64,
    pub emergency_level: u8,
    pub status: ReportStatus,
}

impl ReportResponseDto {
    pub fn new(id: u64, r: Report) -> Self {
        Self {
            id,
            hash: r.hash,
            description: r.description,
            severity: r.severity,
            location: r.location,
            boundaries: r.boundaries,
            timestamp: r.timestamp,
            reporter: r.reporter,
            category: r.category,
            evidence_hashes: r.evidence_hashes,
            impact_level: r.impact_level,
            weather_impact: r.weather_impact,
            affected_population: r.affected_population,
            emergency_level: r.emergency_level,
            status: r.status,
        }
    }
}

/// Response DTO for the latest amendment of a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportUpdateResponseDto {
    pub update_hash: String,
    pub update_description: String,
    pub update_severity: u8,
    pub update_timestamp: u64,
    pub updater: String,
}

impl From<ReportUpdate> for ReportUpdateResponseDto {
    fn from(u: ReportUpdate) -> Self {
        Self {
            update_hash: u.update_hash,
            update_description: u.update_description,
            update_severity: u.update_severity,
            update_timestamp: u.update_timestamp,
            updater: u.updater,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportHashLookupDto {
    pub id: u64,
    pub hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrySummaryDto {
    pub total_reports: u64,
    pub max_reports: u64,
    pub remaining_capacity: u64,
    pub submission_fee: u64,
}

impl From<RegistrySummary> for RegistrySummaryDto {
    fn from(s: RegistrySummary) -> Self {
        Self {
            total_reports: s.total_reports,
            max_reports: s.max_reports,
            remaining_capacity: s.remaining_capacity,
            submission_fee: s.submission_fee,
        }
    }
}
