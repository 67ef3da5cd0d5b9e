//! Great-circle distance computation and ranking.
//!
//! This module is the algorithmic core of the service: it computes haversine
//! distances on a spherical Earth model and produces the distance-ordered
//! view of school records served by the listing endpoint.

use crate::api::{GeoPoint, RankedSchool, School};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers.
///
/// Uses the haversine formula in double precision. The intermediate term is
/// clamped to [0, 1]: rounding error near antipodal points can push it
/// fractionally outside that range, which would feed `sqrt` a negative
/// argument.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Rank schools by ascending distance from `origin`.
///
/// Produces a new ordered sequence rather than reordering the input in
/// place. Records at equal distance keep their input order, so the store's
/// insertion order is the tie-break. No record is excluded regardless of
/// distance.
pub fn rank_by_distance(origin: GeoPoint, schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance_km = haversine_km(origin, school.location());
            RankedSchool {
                school,
                distance_km,
            }
        })
        .collect();

    // Vec::sort_by is stable; equal distances stay in store order.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}
