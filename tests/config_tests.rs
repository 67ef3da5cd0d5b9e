mod support;

use std::str::FromStr;

use school_locator::db::{RepositoryConfig, RepositoryFactory, RepositoryType, SchoolRepository};
use support::with_scoped_env;

#[test]
fn repository_type_parses_known_values() {
    assert_eq!(
        RepositoryType::from_str("local").unwrap(),
        RepositoryType::Local
    );
    assert_eq!(
        RepositoryType::from_str("POSTGRES").unwrap(),
        RepositoryType::Postgres
    );
    assert!(RepositoryType::from_str("mysql").is_err());
}

#[test]
fn repository_type_from_env_prefers_explicit_setting() {
    let repo_type = with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("DATABASE_URL", Some("postgres://ignored")),
        ],
        RepositoryType::from_env,
    );
    assert_eq!(repo_type, RepositoryType::Local);
}

#[test]
fn repository_type_from_env_infers_postgres_from_database_url() {
    let repo_type = with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("postgres://localhost/schools")),
            ("PG_DATABASE_URL", None),
        ],
        RepositoryType::from_env,
    );
    assert_eq!(repo_type, RepositoryType::Postgres);
}

#[test]
fn repository_type_from_env_defaults_to_local() {
    let repo_type = with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", None),
        ],
        RepositoryType::from_env,
    );
    assert_eq!(repo_type, RepositoryType::Local);
}

#[test]
fn config_file_round_trips_local_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("repository.toml");
    std::fs::write(
        &path,
        r#"
[repository]
type = "local"
"#,
    )
    .unwrap();

    let config = RepositoryConfig::from_file(&path).unwrap();
    assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
}

#[test]
fn malformed_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("repository.toml");
    std::fs::write(&path, "not valid toml [").unwrap();

    assert!(RepositoryConfig::from_file(&path).is_err());
}

#[test]
fn missing_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    assert!(RepositoryConfig::from_file(&path).is_err());
}

#[tokio::test]
async fn factory_builds_local_repository_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("repository.toml");
    std::fs::write(
        &path,
        r#"
[repository]
type = "local"
"#,
    )
    .unwrap();

    let repo = RepositoryFactory::from_config_file(&path).await.unwrap();
    assert!(repo.health_check().await.unwrap());
}
