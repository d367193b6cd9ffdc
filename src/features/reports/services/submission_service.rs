use std::sync::Arc;

use crate::features::fees::services::FeeLedger;
use crate::features::reports::errors::RegistryError;
use crate::features::reports::models::{CreateReport, Report, ReportStatus};
use crate::features::reports::services::{ReportStore, ReportValidator};

/// Accepts new reports: validate, charge the fee, then persist and index
pub struct SubmissionService {
    validator: ReportValidator,
    ledger: Arc<dyn FeeLedger>,
    fee: u64,
}

impl SubmissionService {
    pub fn new(validator: ReportValidator, ledger: Arc<dyn FeeLedger>, fee: u64) -> Self {
        Self {
            validator,
            ledger,
            fee,
        }
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    /// Submit a report for `reporter` stamped with `timestamp`
    ///
    /// Returns the newly assigned id. Any failure leaves `store` and the
    /// ledger exactly as they were.
    pub fn submit(
        &self,
        store: &mut ReportStore,
        reporter: &str,
        timestamp: u64,
        data: CreateReport,
    ) -> Result<u64, RegistryError> {
        let checked = self.validator.validate_submission(store, data).map_err(|e| {
            tracing::warn!(
                "Rejected report submission from {}: {} (code {})",
                reporter,
                e,
                e.code()
            );
            e
        })?;

        self.ledger.debit(reporter, self.fee).map_err(|e| {
            tracing::warn!("Submission fee not paid by {}: {}", reporter, e);
            RegistryError::FeeNotPaid
        })?;

        let report = Report {
            hash: checked.hash,
            description: checked.description,
            severity: checked.severity,
            location: checked.location,
            boundaries: checked.boundaries,
            timestamp,
            reporter: reporter.to_string(),
            category: checked.category,
            evidence_hashes: checked.evidence_hashes,
            impact_level: checked.impact_level,
            weather_impact: checked.weather_impact,
            affected_population: checked.affected_population,
            emergency_level: checked.emergency_level,
            status: ReportStatus::Pending,
        };

        let hash = report.hash.clone();
        let id = store.allocate_and_insert(report)?;

        tracing::info!(
            "Accepted report {} (hash: {}) from {} at {}",
            id,
            hash,
            reporter,
            timestamp
        );

        Ok(id)
    }
}
