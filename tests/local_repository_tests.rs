use school_locator::api::NewSchool;
use school_locator::db::repositories::LocalRepository;
use school_locator::db::repository::SchoolRepository;

fn new_school(name: &str) -> NewSchool {
    NewSchool {
        name: name.to_string(),
        address: format!("{} address", name),
        latitude: 10.0,
        longitude: 20.0,
    }
}

#[tokio::test]
async fn assigns_sequential_ids_starting_at_one() {
    let repo = LocalRepository::new();

    let first = repo.insert_school(&new_school("first")).await.unwrap();
    let second = repo.insert_school(&new_school("second")).await.unwrap();
    let third = repo.insert_school(&new_school("third")).await.unwrap();

    assert_eq!(first.value(), 1);
    assert_eq!(second.value(), 2);
    assert_eq!(third.value(), 3);
}

#[tokio::test]
async fn fetch_all_preserves_insertion_order() {
    let repo = LocalRepository::new();
    for name in ["c", "a", "b"] {
        repo.insert_school(&new_school(name)).await.unwrap();
    }

    let schools = repo.fetch_all_schools().await.unwrap();
    let names: Vec<&str> = schools.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn stored_record_round_trips_fields() {
    let repo = LocalRepository::new();
    let school = NewSchool {
        name: "North High".to_string(),
        address: "1 Main St".to_string(),
        latitude: 40.7128,
        longitude: -74.0060,
    };

    let id = repo.insert_school(&school).await.unwrap();
    let stored = repo.fetch_all_schools().await.unwrap();

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].name, school.name);
    assert_eq!(stored[0].address, school.address);
    assert_eq!(stored[0].latitude, school.latitude);
    assert_eq!(stored[0].longitude, school.longitude);
}

#[tokio::test]
async fn ensure_schema_is_a_no_op() {
    let repo = LocalRepository::new();
    repo.ensure_schema().await.unwrap();
    repo.insert_school(&new_school("x")).await.unwrap();
    repo.ensure_schema().await.unwrap();

    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn empty_repository_fetches_empty() {
    let repo = LocalRepository::new();
    assert!(repo.is_empty());
    assert!(repo.fetch_all_schools().await.unwrap().is_empty());
}
