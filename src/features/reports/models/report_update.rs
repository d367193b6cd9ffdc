use serde::{Deserialize, Serialize};

/// Audit record of the latest amendment to a report
///
/// Only one record is kept per report; a newer amendment overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUpdate {
    pub update_hash: String,
    pub update_description: String,
    pub update_severity: u8,
    pub update_timestamp: u64,
    pub updater: String,
}
