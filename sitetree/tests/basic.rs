use sitetree::{
    device_count, load_branches, merge_branches, save_branches, Branch, Device, Plant,
};
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

fn sample_tree() -> Vec<Branch> {
    vec![
        Branch {
            name: "Head Office".to_string(),
            plants: vec![Plant {
                name: "IT Department".to_string(),
                devices: vec![
                    Device {
                        name: "Server Room PC".to_string(),
                        ip: "192.168.1.100".to_string(),
                        port: 5900,
                        password: Some("admin123".to_string()),
                    },
                    Device {
                        name: "Switch Console".to_string(),
                        ip: "192.168.1.101".to_string(),
                        port: 5901,
                        password: None,
                    },
                ],
            }],
        },
        Branch {
            name: "Branch Office".to_string(),
            plants: vec![Plant::named("Sales")],
        },
    ]
}

#[test]
fn save_and_load_round_trip() {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("sitetree_roundtrip_{unique}.json"));

    let branches = sample_tree();
    save_branches(&path, &branches).unwrap();
    let loaded = load_branches(&path).unwrap();

    assert_eq!(loaded, branches);

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_password_is_absent_from_json() {
    let branches = sample_tree();
    let json = serde_json::to_string_pretty(&branches).unwrap();
    // One device has a password, the other does not; the key appears once.
    assert_eq!(json.matches("\"password\"").count(), 1);
}

#[test]
fn merge_into_self_changes_nothing() {
    let mut current = sample_tree();
    merge_branches(&mut current, sample_tree());
    assert_eq!(current, sample_tree());
}

#[test]
fn merge_appends_unknown_branch_whole() {
    let mut current = sample_tree();
    let incoming = vec![Branch {
        name: "New Site".to_string(),
        plants: vec![Plant {
            name: "Line 1".to_string(),
            devices: vec![Device {
                name: "HMI".to_string(),
                ip: "10.0.0.9".to_string(),
                port: 5900,
                password: None,
            }],
        }],
    }];
    merge_branches(&mut current, incoming);
    assert_eq!(current.len(), 3);
    assert_eq!(current[2].name, "New Site");
    assert_eq!(current[2].plants[0].devices.len(), 1);
}

#[test]
fn merge_appends_new_plant_into_matching_branch() {
    let mut current = sample_tree();
    let incoming = vec![Branch {
        name: "Head Office".to_string(),
        plants: vec![Plant::named("Reception")],
    }];
    merge_branches(&mut current, incoming);
    assert_eq!(current.len(), 2);
    assert_eq!(current[0].plants.len(), 2);
    assert_eq!(current[0].plants[1].name, "Reception");
}

#[test]
fn merge_skips_duplicate_endpoint_without_overwriting() {
    let mut current = sample_tree();
    let incoming = vec![Branch {
        name: "Head Office".to_string(),
        plants: vec![Plant {
            name: "IT Department".to_string(),
            devices: vec![
                // Same endpoint as an existing device, different password.
                Device {
                    name: "Renamed".to_string(),
                    ip: "192.168.1.100".to_string(),
                    port: 5900,
                    password: Some("other".to_string()),
                },
                Device {
                    name: "New Box".to_string(),
                    ip: "192.168.1.102".to_string(),
                    port: 5900,
                    password: None,
                },
            ],
        }],
    }];

    let before = device_count(&current);
    merge_branches(&mut current, incoming);

    assert_eq!(device_count(&current), before + 1);
    let existing = &current[0].plants[0].devices[0];
    assert_eq!(existing.name, "Server Room PC");
    assert_eq!(existing.password.as_deref(), Some("admin123"));
}

#[test]
fn merge_never_shrinks_device_count() {
    let mut current = sample_tree();
    let before = device_count(&current);
    merge_branches(&mut current, vec![Branch::named("Empty")]);
    assert!(device_count(&current) >= before);
}
