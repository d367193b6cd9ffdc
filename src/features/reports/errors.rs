use thiserror::Error;

/// Classified registry failures.
///
/// The numeric codes are part of the public contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Caller is not the original reporter")]
    NotAuthorized,

    #[error("Report hash must be 64 hexadecimal characters")]
    InvalidHash,

    #[error("Description must be 1-1000 characters")]
    InvalidDescription,

    #[error("Severity must be between 1 and 10")]
    InvalidSeverity,

    #[error("Location is outside latitude/longitude ranges")]
    InvalidLocation,

    #[error("A report with this hash already exists")]
    AlreadyExists,

    #[error("Report not found")]
    NotFound,

    #[error("Boundaries must satisfy min <= max on both axes")]
    InvalidBoundaries,

    #[error("Update hash must be 64 hexadecimal characters")]
    InvalidUpdateHash,

    #[error("Maximum number of reports reached")]
    CapacityExceeded,

    #[error("Unknown report category")]
    InvalidCategory,

    #[error("Evidence list must contain 1-10 hashes")]
    InvalidEvidenceCount,

    #[error("Impact level must be between 1 and 5")]
    InvalidImpactLevel,

    #[error("Unknown weather impact")]
    InvalidWeatherImpact,

    #[error("Affected population is out of range")]
    InvalidAffectedPopulation,

    #[error("Emergency level must be between 1 and 3")]
    InvalidEmergencyLevel,

    #[error("Submission fee could not be paid")]
    FeeNotPaid,

    #[error("Evidence hash must be 64 hexadecimal characters")]
    InvalidEvidenceHash,

    #[error("Evidence list contains duplicate hashes")]
    DuplicateEvidence,
}

impl RegistryError {
    /// Stable numeric classification code
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::NotAuthorized => 100,
            RegistryError::InvalidHash => 101,
            RegistryError::InvalidDescription => 102,
            RegistryError::InvalidSeverity => 103,
            RegistryError::InvalidLocation => 104,
            RegistryError::AlreadyExists => 105,
            RegistryError::NotFound => 107,
            RegistryError::InvalidBoundaries => 111,
            RegistryError::InvalidUpdateHash => 113,
            RegistryError::CapacityExceeded => 114,
            RegistryError::InvalidCategory => 115,
            RegistryError::InvalidEvidenceCount => 116,
            RegistryError::InvalidImpactLevel => 117,
            RegistryError::InvalidWeatherImpact => 118,
            RegistryError::InvalidAffectedPopulation => 119,
            RegistryError::InvalidEmergencyLevel => 120,
            RegistryError::FeeNotPaid => 122,
            RegistryError::InvalidEvidenceHash => 123,
            RegistryError::DuplicateEvidence => 124,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let expected = [
            (RegistryError::NotAuthorized, 100),
            (RegistryError::InvalidHash, 101),
            (RegistryError::InvalidDescription, 102),
            (RegistryError::InvalidSeverity, 103),
            (RegistryError::InvalidLocation, 104),
            (RegistryError::AlreadyExists, 105),
            (RegistryError::NotFound, 107),
            (RegistryError::InvalidBoundaries, 111),
            (RegistryError::InvalidUpdateHash, 113),
            (RegistryError::CapacityExceeded, 114),
            (RegistryError::InvalidCategory, 115),
            (RegistryError::InvalidEvidenceCount, 116),
            (RegistryError::InvalidImpactLevel, 117),
            (RegistryError::InvalidWeatherImpact, 118),
            (RegistryError::InvalidAffectedPopulation, 119),
            (RegistryError::InvalidEmergencyLevel, 120),
            (RegistryError::FeeNotPaid, 122),
            (RegistryError::InvalidEvidenceHash, 123),
            (RegistryError::DuplicateEvidence, 124),
        ];

        for (error, code) in expected {
            assert_eq!(error.code(), code, "{:?}", error);
        }
    }
}
