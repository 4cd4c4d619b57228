use super::*;

use tempfile::TempDir;

#[test]
fn load_defaults_when_absent() {
    let dir = TempDir::new().expect("tempdir");
    let storage = Storage::open(dir.path()).expect("storage");

    let settings = load(&storage).expect("load");

    assert_eq!(settings, UserSettings::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().expect("tempdir");
    let storage = Storage::open(dir.path()).expect("storage");

    let settings = UserSettings { notifications: false, biometric_unlock: true, analytics: false };
    save(&storage, &settings).expect("save");

    assert_eq!(load(&storage).expect("load"), settings);
}
