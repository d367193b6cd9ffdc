use std::collections::{BTreeMap, HashMap};

use crate::features::reports::errors::RegistryError;
use crate::features::reports::models::{Report, ReportUpdate};

/// Keyed registry state: reports by id, hash index and latest update records
///
/// Mutators keep the index invariants on their own: ids are handed out
/// sequentially and only on successful insert, every indexed hash points at
/// the report that carries it, and the id counter never passes `max_reports`.
#[derive(Debug)]
pub struct ReportStore {
    next_id: u64,
    max_reports: u64,
    reports: BTreeMap<u64, Report>,
    updates: HashMap<u64, ReportUpdate>,
    ids_by_hash: HashMap<String, u64>,
}

impl ReportStore {
    pub fn new(max_reports: u64) -> Self {
        Self {
            next_id: 0,
            max_reports,
            reports: BTreeMap::new(),
            updates: HashMap::new(),
            ids_by_hash: HashMap::new(),
        }
    }

    /// Id the next accepted report will receive
    #[cfg(test)]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn max_reports(&self) -> u64 {
        self.max_reports
    }

    pub fn len(&self) -> u64 {
        self.next_id
    }

    pub fn is_full(&self) -> bool {
        self.next_id >= self.max_reports
    }

    pub fn get(&self, id: u64) -> Option<&Report> {
        self.reports.get(&id)
    }

    pub fn id_for_hash(&self, hash: &str) -> Option<u64> {
        self.ids_by_hash.get(hash).copied()
    }

    pub fn update_record(&self, id: u64) -> Option<&ReportUpdate> {
        self.updates.get(&id)
    }

    /// Reports ordered by id, skipping `offset` and yielding at most `limit`
    pub fn page(&self, offset: usize, limit: usize) -> Vec<(u64, Report)> {
        self.reports
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(id, report)| (*id, report.clone()))
            .collect()
    }

    /// Assign the next id to `report`, store it and index its hash
    pub fn allocate_and_insert(&mut self, report: Report) -> Result<u64, RegistryError> {
        if self.is_full() {
            return Err(RegistryError::CapacityExceeded);
        }
        if self.ids_by_hash.contains_key(&report.hash) {
            return Err(RegistryError::AlreadyExists);
        }

        let id = self.next_id;
        self.ids_by_hash.insert(report.hash.clone(), id);
        self.reports.insert(id, report);
        self.next_id += 1;

        Ok(id)
    }

    /// Move the index entry for `id` from `old_hash` to `new_hash`
    ///
    /// Either both the removal and the insertion happen or nothing changes.
    pub fn reindex(&mut self, old_hash: &str, new_hash: &str, id: u64) -> Result<(), RegistryError> {
        if self.id_for_hash(old_hash) != Some(id) {
            return Err(RegistryError::NotFound);
        }
        match self.id_for_hash(new_hash) {
            Some(owner) if owner != id => return Err(RegistryError::AlreadyExists),
            _ => {}
        }

        if old_hash != new_hash {
            self.ids_by_hash.remove(old_hash);
            self.ids_by_hash.insert(new_hash.to_string(), id);
        }

        Ok(())
    }

    /// Overwrite the report stored at `id`
    ///
    /// The caller must have moved the hash index first when the hash changes.
    pub fn replace(&mut self, id: u64, report: Report) -> Result<(), RegistryError> {
        if self.id_for_hash(&report.hash) != Some(id) {
            return Err(RegistryError::AlreadyExists);
        }
        match self.reports.get_mut(&id) {
            Some(slot) => {
                *slot = report;
                Ok(())
            }
            None => Err(RegistryError::NotFound),
        }
    }

    /// Store `record` as the latest update for `id`, dropping any previous one
    pub fn set_update_record(&mut self, id: u64, record: ReportUpdate) {
        self.updates.insert(id, record);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::features::reports::models::{
        Boundaries, Location, ReportCategory, ReportStatus, WeatherImpact,
    };

    pub(crate) fn stored_report(hash: &str, reporter: &str) -> Report {
        Report {
            hash: hash.to_string(),
            description: "Bridge collapsed".to_string(),
            severity: 5,
            location: Location { lat: 1.0, lon: 2.0 },
            boundaries: Boundaries {
                min_lat: 0.0,
                max_lat: 2.0,
                min_lon: 1.0,
                max_lon: 3.0,
            },
            timestamp: 0,
            reporter: reporter.to_string(),
            category: ReportCategory::PublicEmergency,
            evidence_hashes: vec!["e".repeat(64)],
            impact_level: 2,
            weather_impact: WeatherImpact::None,
            affected_population: 10,
            emergency_level: 1,
            status: ReportStatus::Pending,
        }
    }

    #[test]
    fn test_allocate_assigns_sequential_ids_and_indexes() {
        let mut store = ReportStore::new(10);
        let a = store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();
        let b = store.allocate_and_insert(stored_report(&"b".repeat(64), "bob")).unwrap();

        assert_eq!((a, b), (0, 1));
        assert_eq!(store.next_id(), 2);
        assert_eq!(store.id_for_hash(&"a".repeat(64)), Some(0));
        assert_eq!(store.id_for_hash(&"b".repeat(64)), Some(1));
        assert_eq!(store.get(1).unwrap().reporter, "bob");
    }

    #[test]
    fn test_allocate_rejects_duplicate_hash_without_consuming_id() {
        let mut store = ReportStore::new(10);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();

        let err = store
            .allocate_and_insert(stored_report(&"a".repeat(64), "bob"))
            .unwrap_err();

        assert_eq!(err, RegistryError::AlreadyExists);
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.get(0).unwrap().reporter, "alice");
    }

    #[test]
    fn test_allocate_stops_at_capacity() {
        let mut store = ReportStore::new(1);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();
        assert!(store.is_full());

        let err = store
            .allocate_and_insert(stored_report(&"b".repeat(64), "alice"))
            .unwrap_err();
        assert_eq!(err, RegistryError::CapacityExceeded);
        assert_eq!(store.len(), 1);
        assert_eq!(store.id_for_hash(&"b".repeat(64)), None);
    }

    #[test]
    fn test_reindex_moves_entry() {
        let mut store = ReportStore::new(10);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();

        store.reindex(&"a".repeat(64), &"c".repeat(64), 0).unwrap();

        assert_eq!(store.id_for_hash(&"a".repeat(64)), None);
        assert_eq!(store.id_for_hash(&"c".repeat(64)), Some(0));
    }

    #[test]
    fn test_reindex_to_same_hash_keeps_entry() {
        let mut store = ReportStore::new(10);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();

        store.reindex(&"a".repeat(64), &"a".repeat(64), 0).unwrap();

        assert_eq!(store.id_for_hash(&"a".repeat(64)), Some(0));
    }

    #[test]
    fn test_reindex_collision_changes_nothing() {
        let mut store = ReportStore::new(10);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();
        store.allocate_and_insert(stored_report(&"b".repeat(64), "alice")).unwrap();

        let err = store.reindex(&"a".repeat(64), &"b".repeat(64), 0).unwrap_err();

        assert_eq!(err, RegistryError::AlreadyExists);
        assert_eq!(store.id_for_hash(&"a".repeat(64)), Some(0));
        assert_eq!(store.id_for_hash(&"b".repeat(64)), Some(1));
    }

    #[test]
    fn test_reindex_requires_current_owner() {
        let mut store = ReportStore::new(10);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();

        let err = store.reindex(&"a".repeat(64), &"c".repeat(64), 7).unwrap_err();

        assert_eq!(err, RegistryError::NotFound);
        assert_eq!(store.id_for_hash(&"c".repeat(64)), None);
    }

    #[test]
    fn test_replace_requires_indexed_hash() {
        let mut store = ReportStore::new(10);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();

        let orphan = stored_report(&"f".repeat(64), "alice");
        assert_eq!(store.replace(0, orphan), Err(RegistryError::AlreadyExists));

        let mut same = stored_report(&"a".repeat(64), "alice");
        same.description = "Bridge reopened".to_string();
        store.replace(0, same).unwrap();
        assert_eq!(store.get(0).unwrap().description, "Bridge reopened");
    }

    #[test]
    fn test_update_record_is_overwritten() {
        let mut store = ReportStore::new(10);
        store.allocate_and_insert(stored_report(&"a".repeat(64), "alice")).unwrap();
        let record = |severity: u8| ReportUpdate {
            update_hash: "a".repeat(64),
            update_description: "revised".to_string(),
            update_severity: severity,
            update_timestamp: severity as u64,
            updater: "alice".to_string(),
        };

        store.set_update_record(0, record(3));
        store.set_update_record(0, record(9));

        assert_eq!(store.update_record(0).unwrap().update_severity, 9);
        assert!(store.update_record(1).is_none());
    }

    #[test]
    fn test_page_is_ordered_by_id() {
        let mut store = ReportStore::new(10);
        for c in ['a', 'b', 'c', 'd'] {
            store
                .allocate_and_insert(stored_report(&c.to_string().repeat(64), "alice"))
                .unwrap();
        }

        let ids: Vec<u64> = store.page(1, 2).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(store.page(10, 5).is_empty());
    }
}
