use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Geolocation point of the incident
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn is_within_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Bounding region of the affected area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Boundaries {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Boundaries {
    /// min <= max on both axes (NaN never satisfies this)
    pub fn is_well_formed(&self) -> bool {
        self.min_lat <= self.max_lat && self.min_lon <= self.max_lon
    }
}
