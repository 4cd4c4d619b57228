use super::*;

use tempfile::TempDir;

fn open_storage() -> (TempDir, Storage) {
    let dir = TempDir::new().expect("tempdir");
    let storage = Storage::open(dir.path()).expect("storage");
    (dir, storage)
}

#[test]
fn missing_key_reads_as_none() {
    let (_dir, storage) = open_storage();
    assert!(storage.get_string("auth_token").expect("get").is_none());
    assert!(!storage.contains("auth_token"));
}

#[test]
fn string_round_trip() {
    let (_dir, storage) = open_storage();
    storage.set_string("auth_token", "t1").expect("set");
    assert_eq!(storage.get_string("auth_token").expect("get").as_deref(), Some("t1"));
}

#[test]
fn json_round_trip() {
    let (_dir, storage) = open_storage();
    let value = serde_json::json!({ "_id": "u1", "email": "a@b.com" });
    storage.set_json("user", &value).expect("set");
    assert_eq!(storage.get_json::<serde_json::Value>("user").expect("get"), Some(value));
}

#[test]
fn overwrite_replaces_value() {
    let (_dir, storage) = open_storage();
    storage.set_string("auth_token", "t1").expect("set");
    storage.set_string("auth_token", "t2").expect("set");
    assert_eq!(storage.get_string("auth_token").expect("get").as_deref(), Some("t2"));
}

#[test]
fn remove_deletes_and_tolerates_absent() {
    let (_dir, storage) = open_storage();
    storage.set_string("auth_token", "t1").expect("set");
    storage.remove("auth_token").expect("remove");
    assert!(storage.get_string("auth_token").expect("get").is_none());
    storage.remove("auth_token").expect("remove absent");
}

#[test]
fn corrupt_value_surfaces_as_storage_error() {
    let (dir, storage) = open_storage();
    std::fs::write(dir.path().join("user.json"), "{not json").expect("write");

    let err = storage.get_json::<serde_json::Value>("user").expect_err("should fail");
    assert!(matches!(err, crate::error::ClientError::StorageRead { .. }));
}
