//! Public API surface for the school locator backend.
//!
//! This file consolidates the domain types shared between the HTTP layer and
//! the persistence layer. All types derive Serialize/Deserialize for JSON
//! serialization.

use serde::{Deserialize, Serialize};

/// School identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SchoolId(pub i64);

impl SchoolId {
    pub fn new(value: i64) -> Self {
        SchoolId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A school record as it is about to be persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A persisted school record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    /// The school's coordinate as a geographic point.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A school record paired with its computed distance from a query point.
///
/// Exists only for the duration of a listing response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSchool {
    pub school: School,
    /// Great-circle distance from the query point, in kilometers.
    pub distance_km: f64,
}
