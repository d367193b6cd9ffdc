/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// REGISTRY CONSTANTS
// =============================================================================

/// Maximum number of reports the registry accepts over its lifetime
pub const DEFAULT_MAX_REPORTS: u64 = 10_000;

/// Fee debited from the reporter for every accepted submission
pub const DEFAULT_SUBMISSION_FEE: u64 = 500;

/// Upper bound for the affected-population estimate
pub const DEFAULT_MAX_AFFECTED_POPULATION: u64 = 10_000_000;

/// Balance the in-memory ledger credits to a payer it has not seen before
pub const DEFAULT_LEDGER_OPENING_BALANCE: u64 = 1_000;

/// Header carrying the caller identity verified by the upstream gateway
pub const DEFAULT_IDENTITY_HEADER: &str = "x-caller-id";

/// Longest accepted description, counted in characters
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

/// Evidence list bounds
pub const MIN_EVIDENCE_HASHES: u64 = 1;
pub const MAX_EVIDENCE_HASHES: u64 = 10;
