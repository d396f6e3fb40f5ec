use std::process::Command;

// Each test gets its own HOME so the bootstrap lands in a throwaway
// Documents/VNCManager directory.

#[test]
fn export_bootstraps_and_writes_the_requested_file() {
    let exe = env!("CARGO_BIN_EXE_vncman");
    let home = tempfile::tempdir().expect("tempdir");
    let out = home.path().join("export.json");

    let output = Command::new(exe)
        .env("HOME", home.path())
        .current_dir(home.path())
        .arg("export")
        .arg(&out)
        .output()
        .expect("run vncman");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Exported 5 device(s)"), "stdout: {stdout}");
    let json = std::fs::read_to_string(&out).expect("read export");
    assert!(json.contains("Head Office"));
}

#[test]
fn import_reports_only_newly_gained_devices() {
    let exe = env!("CARGO_BIN_EXE_vncman");
    let home = tempfile::tempdir().expect("tempdir");

    let incoming = vec![sitetree::Branch {
        name: "Head Office".to_string(),
        plants: vec![sitetree::Plant {
            name: "IT Department".to_string(),
            devices: vec![sitetree::Device {
                name: "New Rack PC".to_string(),
                ip: "192.168.1.200".to_string(),
                port: 5900,
                password: None,
            }],
        }],
    }];
    let import = home.path().join("import.json");
    sitetree::save_branches(&import, &incoming).expect("write import");

    let output = Command::new(exe)
        .env("HOME", home.path())
        .current_dir(home.path())
        .arg("import")
        .arg(&import)
        .output()
        .expect("run vncman");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Imported 1 new device(s)"), "stdout: {stdout}");

    // Importing the same file again adds nothing.
    let output = Command::new(exe)
        .env("HOME", home.path())
        .current_dir(home.path())
        .arg("import")
        .arg(&import)
        .output()
        .expect("run vncman");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Imported 0 new device(s)"), "stdout: {stdout}");
}
