//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint. Input validation happens
//! here, before any store call; handlers then delegate to the service layer.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    AddSchoolRequest, AddSchoolResponse, HealthResponse, ListSchoolsQuery, RankedSchoolDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{GeoPoint, NewSchool};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Schools
// =============================================================================

/// POST /addSchool
///
/// Validate and persist a new school record. Returns 201 with the assigned
/// id, 400 on invalid input, 500 on store failure.
pub async fn add_school(
    State(state): State<AppState>,
    payload: Result<Json<AddSchoolRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddSchoolResponse>), AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::BadRequest(format!("Invalid input data: {}", e.body_text())))?;

    let school = validate_add_school(request)?;
    let id = db_services::add_school(state.repository.as_ref(), &school).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddSchoolResponse {
            message: "School added".to_string(),
            school_id: id.value(),
        }),
    ))
}

/// GET /listSchools?latitude=..&longitude=..
///
/// List every stored school ordered by ascending distance from the supplied
/// coordinate. Returns 400 when either coordinate is missing or does not
/// parse as a finite number; no store access happens in that case.
pub async fn list_schools(
    State(state): State<AppState>,
    query: Result<Query<ListSchoolsQuery>, QueryRejection>,
) -> HandlerResult<Vec<RankedSchoolDto>> {
    let Query(query) = query.map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid or missing latitude/longitude: {}",
            e.body_text()
        ))
    })?;

    if !query.latitude.is_finite() || !query.longitude.is_finite() {
        return Err(AppError::BadRequest(
            "Invalid or missing latitude/longitude".to_string(),
        ));
    }

    let origin = GeoPoint::new(query.latitude, query.longitude);
    let ranked = db_services::list_schools_by_distance(state.repository.as_ref(), origin).await?;

    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}

/// Check the value rules for a new school record.
///
/// Name and address must contain non-whitespace text; coordinates must be
/// finite and inside the valid geographic ranges.
fn validate_add_school(request: AddSchoolRequest) -> Result<NewSchool, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("'name' must be non-empty".to_string()));
    }
    if request.address.trim().is_empty() {
        return Err(AppError::BadRequest(
            "'address' must be non-empty".to_string(),
        ));
    }
    if !request.latitude.is_finite() || !(-90.0..=90.0).contains(&request.latitude) {
        return Err(AppError::BadRequest(
            "'latitude' must be a number between -90 and 90".to_string(),
        ));
    }
    if !request.longitude.is_finite() || !(-180.0..=180.0).contains(&request.longitude) {
        return Err(AppError::BadRequest(
            "'longitude' must be a number between -180 and 180".to_string(),
        ));
    }

    Ok(NewSchool {
        name: request.name,
        address: request.address,
        latitude: request.latitude,
        longitude: request.longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, address: &str, latitude: f64, longitude: f64) -> AddSchoolRequest {
        AddSchoolRequest {
            name: name.to_string(),
            address: address.to_string(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn accepts_valid_input() {
        let school = validate_add_school(request("North High", "1 Main St", 40.7, -74.0)).unwrap();
        assert_eq!(school.name, "North High");
    }

    #[test]
    fn rejects_empty_name_and_address() {
        assert!(validate_add_school(request("", "1 Main St", 0.0, 0.0)).is_err());
        assert!(validate_add_school(request("  ", "1 Main St", 0.0, 0.0)).is_err());
        assert!(validate_add_school(request("North High", "", 0.0, 0.0)).is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(validate_add_school(request("a", "b", 200.0, 0.0)).is_err());
        assert!(validate_add_school(request("a", "b", -90.5, 0.0)).is_err());
        assert!(validate_add_school(request("a", "b", 0.0, 180.5)).is_err());
        assert!(validate_add_school(request("a", "b", f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn boundary_coordinates_are_valid() {
        assert!(validate_add_school(request("a", "b", 90.0, 180.0)).is_ok());
        assert!(validate_add_school(request("a", "b", -90.0, -180.0)).is_ok());
    }
}
