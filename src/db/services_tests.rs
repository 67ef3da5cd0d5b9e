use super::services;
use crate::api::{GeoPoint, NewSchool};
use crate::db::repositories::LocalRepository;

fn new_school(name: &str, latitude: f64, longitude: f64) -> NewSchool {
    NewSchool {
        name: name.to_string(),
        address: format!("{} street 1", name),
        latitude,
        longitude,
    }
}

#[tokio::test]
async fn add_school_assigns_sequential_ids() {
    let repo = LocalRepository::new();

    let first = services::add_school(&repo, &new_school("first", 1.0, 1.0))
        .await
        .unwrap();
    let second = services::add_school(&repo, &new_school("second", 2.0, 2.0))
        .await
        .unwrap();

    assert!(second.value() > first.value());
}

#[tokio::test]
async fn added_school_appears_in_listing_with_distance() {
    let repo = LocalRepository::new();
    let school = new_school("Downtown Primary", 40.7128, -74.0060);
    let id = services::add_school(&repo, &school).await.unwrap();

    let ranked = services::list_schools_by_distance(&repo, GeoPoint::new(40.7128, -74.0060))
        .await
        .unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].school.id, id);
    assert_eq!(ranked[0].school.name, "Downtown Primary");
    assert!(ranked[0].distance_km.abs() < 1e-9);
}

#[tokio::test]
async fn listing_is_ordered_by_distance() {
    let repo = LocalRepository::new();
    services::add_school(&repo, &new_school("far", 0.0, 10.0))
        .await
        .unwrap();
    services::add_school(&repo, &new_school("near", 0.0, 1.0))
        .await
        .unwrap();

    let ranked = services::list_schools_by_distance(&repo, GeoPoint::new(0.0, 0.0))
        .await
        .unwrap();

    assert_eq!(ranked[0].school.name, "near");
    assert_eq!(ranked[1].school.name, "far");
    assert!(ranked[0].distance_km <= ranked[1].distance_km);
}

#[tokio::test]
async fn empty_store_lists_empty() {
    let repo = LocalRepository::new();

    let schools = services::list_schools(&repo).await.unwrap();
    assert!(schools.is_empty());

    let ranked = services::list_schools_by_distance(&repo, GeoPoint::new(12.0, 34.0))
        .await
        .unwrap();
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn health_check_reports_local_store_up() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}
