//! Locating, loading and bootstrapping the device configuration file.

use sitetree::{load_branches, save_branches, Branch, Device, Plant};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "devices_config.json";

pub(crate) fn documents_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join("Documents").join("VNCManager"))
}

#[cfg(windows)]
pub(crate) fn app_data_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(|data| PathBuf::from(data).join("VNCManager"))
}

#[cfg(not(windows))]
pub(crate) fn app_data_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("vncman"))
}

/// Search locations in probe order: working directory, executable directory,
/// per-user documents, per-user application data.
pub fn candidate_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CONFIG_FILE_NAME));
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }
    }
    if let Some(docs) = documents_dir() {
        paths.push(docs.join(CONFIG_FILE_NAME));
    }
    if let Some(data) = app_data_dir() {
        paths.push(data.join(CONFIG_FILE_NAME));
    }
    paths
}

/// Returns the first existing candidate, or a freshly created per-user
/// documents path when none exists yet. Failing to create that directory is
/// the one startup error this module treats as fatal to the caller.
pub fn resolve_config_path() -> Result<PathBuf, String> {
    for path in candidate_config_paths() {
        if path.is_file() {
            return Ok(path);
        }
    }
    let dir = documents_dir()
        .ok_or_else(|| "Could not determine a per-user documents directory".to_string())?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create '{}': {e}", dir.display()))?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Loads the tree at `path`. A missing file is bootstrapped with sample data
/// and written back immediately; a corrupt or unreadable file degrades to an
/// empty collection. Neither case is fatal.
pub fn load_or_bootstrap(path: &Path) -> Vec<Branch> {
    if !path.exists() {
        let branches = sample_branches();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = save_branches(path, &branches) {
            log::warn!(
                "Failed to write sample configuration to '{}': {err}",
                path.display()
            );
        } else {
            log::info!("Created sample configuration at '{}'", path.display());
        }
        return branches;
    }
    match load_branches(path) {
        Ok(branches) => branches,
        Err(err) => {
            log::warn!(
                "Failed to load configuration from '{}': {err}",
                path.display()
            );
            Vec::new()
        }
    }
}

fn device(name: &str, ip: &str, port: u16, password: &str) -> Device {
    Device {
        name: name.to_string(),
        ip: ip.to_string(),
        port,
        password: Some(password.to_string()),
    }
}

/// Deterministic first-run sample: two branches, three plants, five devices
/// with placeholder credentials for the user to replace.
pub fn sample_branches() -> Vec<Branch> {
    vec![
        Branch {
            name: "Head Office".to_string(),
            plants: vec![
                Plant {
                    name: "IT Department".to_string(),
                    devices: vec![
                        device("Server Room PC", "192.168.1.100", 5900, "admin123"),
                        device("Network Switch Console", "192.168.1.101", 5901, "network456"),
                    ],
                },
                Plant {
                    name: "Reception".to_string(),
                    devices: vec![device("Reception Desktop", "192.168.1.150", 5900, "reception789")],
                },
            ],
        },
        Branch {
            name: "Branch Office".to_string(),
            plants: vec![Plant {
                name: "Sales Department".to_string(),
                devices: vec![
                    device("Sales Manager PC", "192.168.2.100", 5900, "sales2024"),
                    device("Conference Room PC", "192.168.2.101", 5900, "conference"),
                ],
            }],
        },
    ]
}
