use crate::features::reports::errors::RegistryError;
use crate::features::reports::models::{Report, ReportUpdate, UpdateReport};
use crate::features::reports::services::{ReportStore, ReportValidator};

/// Lets the original reporter amend hash, description and severity
pub struct UpdateService {
    validator: ReportValidator,
}

impl UpdateService {
    pub fn new(validator: ReportValidator) -> Self {
        Self { validator }
    }

    /// Amend report `id` on behalf of `caller`
    ///
    /// Moves the hash index, rewrites the report and replaces the stored
    /// update record. Only the report at `id` is touched.
    pub fn update(
        &self,
        store: &mut ReportStore,
        caller: &str,
        timestamp: u64,
        id: u64,
        data: UpdateReport,
    ) -> Result<bool, RegistryError> {
        let checked = self
            .validator
            .validate_update(store, caller, id, data)
            .map_err(|e| {
                tracing::warn!(
                    "Rejected update of report {} by {}: {} (code {})",
                    id,
                    caller,
                    e,
                    e.code()
                );
                e
            })?;

        let current = store.get(id).ok_or(RegistryError::NotFound)?;
        let old_hash = current.hash.clone();
        let updated = Report {
            hash: checked.hash.clone(),
            description: checked.description.clone(),
            severity: checked.severity,
            timestamp,
            ..current.clone()
        };

        store.reindex(&old_hash, &checked.hash, id)?;
        store.replace(id, updated)?;
        store.set_update_record(
            id,
            ReportUpdate {
                update_hash: checked.hash,
                update_description: checked.description,
                update_severity: checked.severity,
                update_timestamp: timestamp,
                updater: caller.to_string(),
            },
        );

        tracing::info!("Updated report {} by {} at {}", id, caller, timestamp);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::services::report_store::tests::stored_report;

    fn seeded_store() -> ReportStore {
        let mut store = ReportStore::new(10);
        store
            .allocate_and_insert(stored_report(&"a".repeat(64), "alice"))
            .unwrap();
        store
            .allocate_and_insert(stored_report(&"d".repeat(64), "bob"))
            .unwrap();
        store
    }

    fn amendment(hash: &str, description: &str, severity: i64) -> UpdateReport {
        UpdateReport {
            hash: hash.to_string(),
            description: description.to_string(),
            severity,
        }
    }

    fn service() -> UpdateService {
        UpdateService::new(ReportValidator::new(10_000_000))
    }

    #[test]
    fn test_update_rewrites_content_and_index() {
        let mut store = seeded_store();
        let before = store.get(0).unwrap().clone();

        let updated = service()
            .update(
                &mut store,
                "alice",
                33,
                0,
                amendment(&"b".repeat(64), "new description", 4),
            )
            .unwrap();

        assert!(updated);
        let after = store.get(0).unwrap();
        assert_eq!(after.hash, "b".repeat(64));
        assert_eq!(after.description, "new description");
        assert_eq!(after.severity, 4);
        assert_eq!(after.timestamp, 33);
        assert_eq!(after.location, before.location);
        assert_eq!(after.boundaries, before.boundaries);
        assert_eq!(after.category, before.category);
        assert_eq!(after.evidence_hashes, before.evidence_hashes);
        assert_eq!(after.impact_level, before.impact_level);
        assert_eq!(after.weather_impact, before.weather_impact);
        assert_eq!(after.affected_population, before.affected_population);
        assert_eq!(after.emergency_level, before.emergency_level);
        assert_eq!(after.reporter, before.reporter);
        assert_eq!(after.status, before.status);

        assert_eq!(store.id_for_hash(&"a".repeat(64)), None);
        assert_eq!(store.id_for_hash(&"b".repeat(64)), Some(0));

        let record = store.update_record(0).unwrap();
        assert_eq!(record.update_hash, "b".repeat(64));
        assert_eq!(record.update_description, "new description");
        assert_eq!(record.update_severity, 4);
        assert_eq!(record.update_timestamp, 33);
        assert_eq!(record.updater, "alice");
    }

    #[test]
    fn test_update_by_other_caller_is_rejected() {
        let mut store = seeded_store();
        let before = store.get(0).unwrap().clone();

        let err = service()
            .update(&mut store, "bob", 5, 0, amendment(&"b".repeat(64), "hijack", 9))
            .unwrap_err();

        assert_eq!(err, RegistryError::NotAuthorized);
        assert_eq!(store.get(0).unwrap(), &before);
        assert!(store.update_record(0).is_none());
    }

    #[test]
    fn test_update_missing_report() {
        let mut store = seeded_store();
        let err = service()
            .update(&mut store, "alice", 5, 99, amendment(&"b".repeat(64), "x", 3))
            .unwrap_err();
        assert_eq!(err, RegistryError::NotFound);
    }

    #[test]
    fn test_update_cannot_take_another_reports_hash() {
        let mut store = seeded_store();

        let err = service()
            .update(&mut store, "alice", 5, 0, amendment(&"d".repeat(64), "x", 3))
            .unwrap_err();

        assert_eq!(err, RegistryError::AlreadyExists);
        assert_eq!(store.id_for_hash(&"a".repeat(64)), Some(0));
        assert_eq!(store.id_for_hash(&"d".repeat(64)), Some(1));
        assert_eq!(store.get(1).unwrap().reporter, "bob");
    }

    #[test]
    fn test_only_latest_update_is_kept() {
        let mut store = seeded_store();
        let svc = service();

        svc.update(&mut store, "alice", 1, 0, amendment(&"b".repeat(64), "first", 2))
            .unwrap();
        svc.update(&mut store, "alice", 2, 0, amendment(&"c".repeat(64), "second", 3))
            .unwrap();

        let record = store.update_record(0).unwrap();
        assert_eq!(record.update_description, "second");
        assert_eq!(record.update_timestamp, 2);
        assert_eq!(store.id_for_hash(&"b".repeat(64)), None);
        assert_eq!(store.id_for_hash(&"c".repeat(64)), Some(0));
    }

    #[test]
    fn test_update_keeping_same_hash() {
        let mut store = seeded_store();

        service()
            .update(&mut store, "alice", 7, 0, amendment(&"a".repeat(64), "clarified", 6))
            .unwrap();

        assert_eq!(store.id_for_hash(&"a".repeat(64)), Some(0));
        assert_eq!(store.get(0).unwrap().description, "clarified");
    }
}
