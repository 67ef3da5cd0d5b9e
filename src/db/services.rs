//! High-level business logic functions over the repository trait.
//!
//! These functions work with any [`SchoolRepository`] implementation and are
//! what the HTTP handlers call. The distance-ordered listing lives here: it
//! fetches the records once and hands them to the pure ranking function.

use crate::api::{GeoPoint, NewSchool, RankedSchool, School, SchoolId};
use crate::db::repository::{RepositoryResult, SchoolRepository};
use crate::geo;

/// Create the schools table if it does not exist yet.
///
/// Best-effort startup step; callers log a failure and keep serving.
pub async fn ensure_schema(repo: &dyn SchoolRepository) -> RepositoryResult<()> {
    repo.ensure_schema().await
}

/// Persist a validated school record and return its assigned id.
pub async fn add_school(
    repo: &dyn SchoolRepository,
    school: &NewSchool,
) -> RepositoryResult<SchoolId> {
    repo.insert_school(school).await
}

/// Fetch all school records in store order.
pub async fn list_schools(repo: &dyn SchoolRepository) -> RepositoryResult<Vec<School>> {
    repo.fetch_all_schools().await
}

/// Fetch all school records and rank them by distance from `origin`.
///
/// The store's order is preserved for records at equal distance.
pub async fn list_schools_by_distance(
    repo: &dyn SchoolRepository,
    origin: GeoPoint,
) -> RepositoryResult<Vec<RankedSchool>> {
    let schools = repo.fetch_all_schools().await?;
    Ok(geo::rank_by_distance(origin, schools))
}

/// Verify the store is reachable.
pub async fn health_check(repo: &dyn SchoolRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
