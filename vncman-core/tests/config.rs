use sitetree::load_branches;
use vncman_core::config::{
    load_or_bootstrap, load_settings_from, sample_branches, save_settings_to, AppSettings,
};

#[test]
fn bootstrap_creates_sample_file_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("devices_config.json");

    let branches = load_or_bootstrap(&path);

    assert!(!branches.is_empty());
    assert_eq!(branches, sample_branches());
    assert!(path.exists());
    // The written file round-trips to the same collection.
    assert_eq!(load_branches(&path).expect("load"), branches);
}

#[test]
fn corrupt_file_degrades_to_empty_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("devices_config.json");
    std::fs::write(&path, b"{not json").expect("write");

    let branches = load_or_bootstrap(&path);

    assert!(branches.is_empty());
    // The corrupt file is left alone, not clobbered with sample data.
    assert_eq!(std::fs::read(&path).expect("read"), b"{not json");
}

#[test]
fn sample_collection_shape() {
    let branches = sample_branches();
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].plants.len(), 2);
    assert_eq!(sitetree::device_count(&branches), 5);
}

#[test]
fn settings_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("system_config.json");

    let settings = AppSettings {
        viewer_path: "/opt/tigervnc/vncviewer".to_string(),
        last_data_file_path: Some("/data/devices_config.json".to_string()),
    };
    save_settings_to(&path, &settings).expect("save settings");

    assert_eq!(load_settings_from(&path), settings);

    let json = std::fs::read_to_string(&path).expect("read");
    assert!(json.contains("\"viewerPath\""));
    assert!(json.contains("\"lastDataFilePath\""));
}

#[test]
fn settings_load_is_fail_soft() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");
    assert_eq!(load_settings_from(&missing), AppSettings::default());

    let corrupt = dir.path().join("bad.json");
    std::fs::write(&corrupt, b"[]").expect("write");
    assert_eq!(load_settings_from(&corrupt), AppSettings::default());
}
