use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::config::RegistryConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::CallerIdentity;
use crate::features::fees::services::FeeLedger;
use crate::features::reports::errors::RegistryError;
use crate::features::reports::models::{CreateReport, Report, ReportUpdate, UpdateReport};
use crate::features::reports::services::{
    ReportStore, ReportValidator, SubmissionService, UpdateService,
};
use crate::shared::clock::TimeSource;
use crate::shared::types::PaginationQuery;

/// Registry counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrySummary {
    pub total_reports: u64,
    pub max_reports: u64,
    pub remaining_capacity: u64,
    pub submission_fee: u64,
}

/// Service for report operations
///
/// Owns the registry state. Each submission or update holds the store lock
/// from the first rule check to the last write, so mutations never
/// interleave.
pub struct ReportService {
    store: Mutex<ReportStore>,
    submissions: SubmissionService,
    updates: UpdateService,
    clock: Arc<dyn TimeSource>,
}

impl ReportService {
    pub fn new(
        config: &RegistryConfig,
        ledger: Arc<dyn FeeLedger>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        let validator = ReportValidator::new(config.max_affected_population);
        Self {
            store: Mutex::new(ReportStore::new(config.max_reports)),
            submissions: SubmissionService::new(validator, ledger, config.submission_fee),
            updates: UpdateService::new(validator),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ReportStore>> {
        self.store.lock().map_err(|e| {
            tracing::error!("Report store lock poisoned: {}", e);
            AppError::Internal("Report store unavailable".to_string())
        })
    }

    /// Submit a new report, returning its id
    pub fn submit(&self, caller: &CallerIdentity, data: CreateReport) -> Result<u64> {
        let mut store = self.lock()?;
        let now = self.clock.now();
        let id = self
            .submissions
            .submit(&mut store, caller.as_str(), now, data)?;
        Ok(id)
    }

    /// Get report by ID
    pub fn get(&self, id: u64) -> Result<Report> {
        let store = self.lock()?;
        store
            .get(id)
            .cloned()
            .ok_or(AppError::Registry(RegistryError::NotFound))
    }

    /// Amend an existing report as its original reporter
    pub fn update(&self, caller: &CallerIdentity, id: u64, data: UpdateReport) -> Result<bool> {
        let mut store = self.lock()?;
        let now = self.clock.now();
        let updated = self
            .updates
            .update(&mut store, caller.as_str(), now, id, data)?;
        Ok(updated)
    }

    /// Latest amendment of a report, `None` if it was never amended
    pub fn latest_update(&self, id: u64) -> Result<Option<ReportUpdate>> {
        let store = self.lock()?;
        if store.get(id).is_none() {
            return Err(RegistryError::NotFound.into());
        }
        Ok(store.update_record(id).cloned())
    }

    /// Resolve a content hash to the id of the report currently carrying it
    pub fn find_by_hash(&self, hash: &str) -> Result<u64> {
        let store = self.lock()?;
        store
            .id_for_hash(hash)
            .ok_or(AppError::Registry(RegistryError::NotFound))
    }

    /// Page through reports ordered by id, with the total count
    pub fn list(&self, query: &PaginationQuery) -> Result<(Vec<(u64, Report)>, i64)> {
        let store = self.lock()?;
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit()).unwrap_or(0);
        let total = i64::try_from(store.len()).unwrap_or(i64::MAX);
        Ok((store.page(offset, limit), total))
    }

    pub fn summary(&self) -> Result<RegistrySummary> {
        let store = self.lock()?;
        Ok(RegistrySummary {
            total_reports: store.len(),
            max_reports: store.max_reports(),
            remaining_capacity: store.max_reports().saturating_sub(store.len()),
            submission_fee: self.submissions.fee(),
        })
    }
}
