//! Data model for the branch → plant → device configuration tree.
//!
//! The tree has a fixed depth of three levels. Branches own plants, plants own
//! devices, and the ordered `Vec<Branch>` root collection is the unit of
//! persistence. Parents are reached through index paths held by callers, so
//! the serialized form contains no back-references.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod merge;
pub use merge::{device_count, merge_branches};

/// Default port used by VNC servers, pre-filled when adding a device.
pub const DEFAULT_VNC_PORT: u16 = 5900;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub plants: Vec<Plant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub ip: String,
    pub port: u16,
    /// Stored in plaintext; protecting credentials is out of scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Branch {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plants: Vec::new(),
        }
    }
}

impl Plant {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            devices: Vec::new(),
        }
    }
}

impl Device {
    /// Merge identity: two devices are the same endpoint when both the IP and
    /// the port match.
    pub fn same_endpoint(&self, other: &Device) -> bool {
        self.ip == other.ip && self.port == other.port
    }

    /// Display form used in the tree, e.g. `192.168.1.100:5900`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SiteTreeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the root collection as indented JSON.
pub fn save_branches<P: AsRef<Path>>(path: P, branches: &[Branch]) -> Result<(), SiteTreeError> {
    let data = serde_json::to_vec_pretty(branches)?;
    fs::write(path, data)?;
    Ok(())
}

/// Reads a root collection back from disk.
pub fn load_branches<P: AsRef<Path>>(path: P) -> Result<Vec<Branch>, SiteTreeError> {
    let data = fs::read(path)?;
    let branches = serde_json::from_slice(&data)?;
    Ok(branches)
}
