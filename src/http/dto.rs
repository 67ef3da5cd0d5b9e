//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.

use serde::{Deserialize, Serialize};

use crate::api::RankedSchool;

/// Request body for registering a new school.
///
/// Field presence and types are enforced by deserialization; value rules
/// (non-empty text, coordinate ranges) are checked in the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSchoolRequest {
    /// School name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Response for school creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSchoolResponse {
    /// Message about the operation
    pub message: String,
    /// Identifier assigned by the store
    #[serde(rename = "schoolId")]
    pub school_id: i64,
}

/// Query parameters for the distance-ordered listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSchoolsQuery {
    /// Latitude of the query point in degrees
    pub latitude: f64,
    /// Longitude of the query point in degrees
    pub longitude: f64,
}

/// A school entry in the listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSchoolDto {
    /// School ID
    pub id: i64,
    /// School name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Great-circle distance from the query point, in kilometers
    pub distance: f64,
}

impl From<RankedSchool> for RankedSchoolDto {
    fn from(ranked: RankedSchool) -> Self {
        Self {
            id: ranked.school.id.value(),
            name: ranked.school.name,
            address: ranked.school.address,
            latitude: ranked.school.latitude,
            longitude: ranked.school.longitude,
            distance: ranked.distance_km,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
