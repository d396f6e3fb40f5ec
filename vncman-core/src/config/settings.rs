//! Process settings: viewer executable path and last-used data file path.
//!
//! Kept separate from the device configuration store; this file only records
//! where things live, never what they contain.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "system_config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(rename = "viewerPath")]
    pub viewer_path: String,
    #[serde(
        rename = "lastDataFilePath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_data_file_path: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            viewer_path: default_viewer_path(),
            last_data_file_path: None,
        }
    }
}

#[cfg(windows)]
pub fn default_viewer_path() -> String {
    r"C:\Program Files\TightVNC\tvnviewer.exe".to_string()
}

#[cfg(not(windows))]
pub fn default_viewer_path() -> String {
    "/usr/bin/vncviewer".to_string()
}

pub fn settings_path() -> Option<PathBuf> {
    super::io::app_data_dir().map(|dir| dir.join(SETTINGS_FILE_NAME))
}

/// Fail-soft load: any read or parse error falls back to defaults.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read(path) {
        Ok(data) => match serde_json::from_slice(&data) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to parse settings file '{}': {err}", path.display());
                AppSettings::default()
            }
        },
        Err(err) => {
            if path.exists() {
                log::warn!("Failed to read settings file '{}': {err}", path.display());
            }
            AppSettings::default()
        }
    }
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let data = serde_json::to_vec_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    std::fs::write(path, data)
        .map_err(|e| format!("Failed to write settings file '{}': {e}", path.display()))
}

pub fn load_settings() -> AppSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => AppSettings::default(),
    }
}

pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    let path = settings_path()
        .ok_or_else(|| "Could not determine a per-user settings directory".to_string())?;
    save_settings_to(&path, settings)
}
