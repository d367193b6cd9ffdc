//! Ordered rule chains for submissions and amendments.
//!
//! Each chain returns the first violated rule and stops there. Callers rely
//! on receiving exactly that rule's code, so the order of the checks below is
//! part of the public contract.

use std::collections::HashSet;

use validator::{ValidateLength, ValidateRange};

use crate::features::reports::errors::RegistryError;
use crate::features::reports::models::{
    Boundaries, CreateReport, Location, ReportCategory, UpdateReport, WeatherImpact,
};
use crate::features::reports::services::ReportStore;
use crate::shared::constants::{MAX_DESCRIPTION_LENGTH, MAX_EVIDENCE_HASHES, MIN_EVIDENCE_HASHES};
use crate::shared::validation::is_hex_hash;

/// Submission fields that passed every rule, converted to stored types
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReport {
    pub hash: String,
    pub description: String,
    pub severity: u8,
    pub location: Location,
    pub boundaries: Boundaries,
    pub category: ReportCategory,
    pub evidence_hashes: Vec<String>,
    pub impact_level: u8,
    pub weather_impact: WeatherImpact,
    pub affected_population: u64,
    pub emergency_level: u8,
}

/// Amendment fields that passed every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpdate {
    pub hash: String,
    pub description: String,
    pub severity: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportValidator {
    max_affected_population: u64,
}

impl ReportValidator {
    pub fn new(max_affected_population: u64) -> Self {
        Self {
            max_affected_population,
        }
    }

    /// Run the submission chain against the current store contents.
    ///
    /// Fee payment is not part of this chain; it is the final gate and is
    /// charged by the submission service only after this returns `Ok`.
    pub fn validate_submission(
        &self,
        store: &ReportStore,
        data: CreateReport,
    ) -> Result<ValidatedReport, RegistryError> {
        if store.is_full() {
            return Err(RegistryError::CapacityExceeded);
        }
        if !is_hex_hash(&data.hash) {
            return Err(RegistryError::InvalidHash);
        }
        if !is_valid_description(&data.description) {
            return Err(RegistryError::InvalidDescription);
        }
        let severity = bounded(data.severity, 1, 10).ok_or(RegistryError::InvalidSeverity)?;
        if !data.location.is_within_range() {
            return Err(RegistryError::InvalidLocation);
        }
        if !data.boundaries.is_well_formed() {
            return Err(RegistryError::InvalidBoundaries);
        }
        let category = data
            .category
            .parse::<ReportCategory>()
            .map_err(|_| RegistryError::InvalidCategory)?;
        if !data.evidence_hashes.validate_length(
            Some(MIN_EVIDENCE_HASHES),
            Some(MAX_EVIDENCE_HASHES),
            None,
        ) {
            return Err(RegistryError::InvalidEvidenceCount);
        }
        if !data.evidence_hashes.iter().all(|h| is_hex_hash(h)) {
            return Err(RegistryError::InvalidEvidenceHash);
        }
        if has_duplicates(&data.evidence_hashes) {
            return Err(RegistryError::DuplicateEvidence);
        }
        let impact_level = bounded(data.impact_level, 1, 5).ok_or(RegistryError::InvalidImpactLevel)?;
        let weather_impact = data
            .weather_impact
            .parse::<WeatherImpact>()
            .map_err(|_| RegistryError::InvalidWeatherImpact)?;
        let affected_population = u64::try_from(data.affected_population)
            .ok()
            .filter(|population| *population <= self.max_affected_population)
            .ok_or(RegistryError::InvalidAffectedPopulation)?;
        let emergency_level =
            bounded(data.emergency_level, 1, 3).ok_or(RegistryError::InvalidEmergencyLevel)?;
        if store.id_for_hash(&data.hash).is_some() {
            return Err(RegistryError::AlreadyExists);
        }

        Ok(ValidatedReport {
            hash: data.hash,
            description: data.description,
            severity,
            location: data.location,
            boundaries: data.boundaries,
            category,
            evidence_hashes: data.evidence_hashes,
            impact_level,
            weather_impact,
            affected_population,
            emergency_level,
        })
    }

    /// Run the amendment chain for report `id` on behalf of `caller`
    pub fn validate_update(
        &self,
        store: &ReportStore,
        caller: &str,
        id: u64,
        data: UpdateReport,
    ) -> Result<ValidatedUpdate, RegistryError> {
        let report = store.get(id).ok_or(RegistryError::NotFound)?;
        if report.reporter != caller {
            return Err(RegistryError::NotAuthorized);
        }
        if !is_hex_hash(&data.hash) {
            return Err(RegistryError::InvalidUpdateHash);
        }
        if !is_valid_description(&data.description) {
            return Err(RegistryError::InvalidDescription);
        }
        let severity = bounded(data.severity, 1, 10).ok_or(RegistryError::InvalidSeverity)?;
        match store.id_for_hash(&data.hash) {
            Some(owner) if owner != id => return Err(RegistryError::AlreadyExists),
            _ => {}
        }

        Ok(ValidatedUpdate {
            hash: data.hash,
            description: data.description,
            severity,
        })
    }
}

/// Non-empty and at most 1000 characters (not bytes)
fn is_valid_description(description: &str) -> bool {
    description.validate_length(Some(1), Some(MAX_DESCRIPTION_LENGTH), None)
}

/// `value` as a `u8` when it lies within `[min, max]`
fn bounded(value: i64, min: i64, max: i64) -> Option<u8> {
    if value.validate_range(Some(min), Some(max), None, None) {
        u8::try_from(value).ok()
    } else {
        None
    }
}

fn has_duplicates(hashes: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(hashes.len());
    !hashes.iter().all(|h| seen.insert(h.as_str()))
}
