//! User directory integration tests

use biblius::{config::StorageConfig, repository::Repository, services::Services};
use tempfile::TempDir;

fn setup() -> (TempDir, Services) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = StorageConfig {
        catalog_file: dir.path().join("catalog.csv"),
        loans_file: dir.path().join("loans.csv"),
        users_file: dir.path().join("users.csv"),
    };
    let services = Services::new(Repository::new(&storage));
    (dir, services)
}

#[test]
fn validate_against_empty_directory_returns_false() {
    let (_dir, services) = setup();
    let valid = services
        .directory
        .validate("Ana", "111")
        .expect("Failed to validate");
    assert!(!valid);
}

#[test]
fn register_then_validate_requires_exact_match_on_both_fields() {
    let (_dir, services) = setup();
    services
        .directory
        .register("Ana", "111")
        .expect("Failed to register user");

    assert!(services.directory.validate("Ana", "111").unwrap());
    assert!(!services.directory.validate("Ana", "222").unwrap());
    assert!(!services.directory.validate("ana", "111").unwrap());
    assert!(!services.directory.validate("Bruno", "111").unwrap());
}

#[test]
fn register_creates_file_with_header_row() {
    let (dir, services) = setup();
    services
        .directory
        .register("Ana", "111")
        .expect("Failed to register user");

    let contents =
        std::fs::read_to_string(dir.path().join("users.csv")).expect("Failed to read store");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("name,identifier"));
    assert_eq!(lines.next(), Some("Ana,111"));
}

#[test]
fn register_into_preexisting_empty_file_writes_header() {
    let (dir, services) = setup();
    // A zero-byte store left behind by an interrupted write.
    std::fs::write(dir.path().join("users.csv"), "").expect("Failed to seed store");

    services
        .directory
        .register("Ana", "111")
        .expect("Failed to register user");

    assert!(services.directory.validate("Ana", "111").unwrap());

    let contents =
        std::fs::read_to_string(dir.path().join("users.csv")).expect("Failed to read store");
    assert_eq!(contents.lines().next(), Some("name,identifier"));
}

#[test]
fn rows_missing_the_identifier_are_skipped() {
    let (dir, services) = setup();
    std::fs::write(
        dir.path().join("users.csv"),
        "name,identifier\n\
         Bruno\n\
         Ana,111\n",
    )
    .expect("Failed to seed store");

    assert!(services.directory.validate("Ana", "111").unwrap());
    assert!(!services.directory.validate("Bruno", "").unwrap());
}

#[test]
fn directory_is_append_only_and_permits_duplicates() {
    let (dir, services) = setup();
    services
        .directory
        .register("Ana", "111")
        .expect("Failed to register user");
    services
        .directory
        .register("Ana", "111")
        .expect("Failed to register user");

    let contents =
        std::fs::read_to_string(dir.path().join("users.csv")).expect("Failed to read store");
    assert_eq!(contents.lines().count(), 3);
    assert!(services.directory.validate("Ana", "111").unwrap());
}
