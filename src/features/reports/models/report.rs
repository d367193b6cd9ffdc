use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::{Boundaries, Location};

/// Report lifecycle status
///
/// Only `Pending` is ever assigned by the registry core; later states are
/// driven by downstream curation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Crisis category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportCategory {
    NaturalDisaster,
    Conflict,
    PublicEmergency,
    HealthCrisis,
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCategory::NaturalDisaster => write!(f, "natural-disaster"),
            ReportCategory::Conflict => write!(f, "conflict"),
            ReportCategory::PublicEmergency => write!(f, "public-emergency"),
            ReportCategory::HealthCrisis => write!(f, "health-crisis"),
        }
    }
}

impl FromStr for ReportCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural-disaster" => Ok(ReportCategory::NaturalDisaster),
            "conflict" => Ok(ReportCategory::Conflict),
            "public-emergency" => Ok(ReportCategory::PublicEmergency),
            "health-crisis" => Ok(ReportCategory::HealthCrisis),
            _ => Err(()),
        }
    }
}

/// Weather contribution to the crisis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeatherImpact {
    None,
    Mild,
    Severe,
}

impl std::fmt::Display for WeatherImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherImpact::None => write!(f, "none"),
            WeatherImpact::Mild => write!(f, "mild"),
            WeatherImpact::Severe => write!(f, "severe"),
        }
    }
}

impl FromStr for WeatherImpact {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(WeatherImpact::None),
            "mild" => Ok(WeatherImpact::Mild),
            "severe" => Ok(WeatherImpact::Severe),
            _ => Err(()),
        }
    }
}

/// Stored crisis report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
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

/// Raw submission fields, not yet validated
///
/// Numeric fields are signed and enumerations are plain strings so that any
/// out-of-range value reaches the ordered rule chain.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub hash: String,
    pub description: String,
    pub severity: i64,
    pub location: Location,
    pub boundaries: Boundaries,
    pub category: String,
    pub evidence_hashes: Vec<String>,
    pub impact_level: i64,
    pub weather_impact: String,
    pub affected_population: i64,
    pub emergency_level: i64,
}

/// Raw amendment fields for an existing report
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub hash: String,
    pub description: String,
    pub severity: i64,
}
