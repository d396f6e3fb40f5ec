//! Update check against a published version manifest.

use serde::Deserialize;
use std::process::Command;
use std::time::Duration;

/// Where the published version descriptor lives.
pub const UPDATE_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/vncman/vncman/master/update.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateManifest {
    pub version: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub changelog_url: Option<String>,
}

pub fn fetch_update_manifest(url: &str) -> Result<UpdateManifest, String> {
    let body = ureq::get(url)
        .timeout(FETCH_TIMEOUT)
        .call()
        .map_err(|e| format!("Update check failed: {e}"))?
        .into_string()
        .map_err(|e| format!("Update check failed: {e}"))?;
    serde_json::from_str(&body).map_err(|e| format!("Invalid update manifest: {e}"))
}

fn version_components(version: &str) -> Vec<u64> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}

/// Strictly-greater comparison of dot-separated numeric versions. Missing
/// components count as zero, so "1.2" and "1.2.0" compare equal.
pub fn is_newer(remote: &str, current: &str) -> bool {
    let remote = version_components(remote);
    let current = version_components(current);
    for i in 0..remote.len().max(current.len()) {
        let r = remote.get(i).copied().unwrap_or(0);
        let c = current.get(i).copied().unwrap_or(0);
        if r != c {
            return r > c;
        }
    }
    false
}

/// Display form of a version: a trailing ".0" revision component is dropped,
/// so "2.1.0.0" shows as "2.1.0".
pub fn trim_version(version: &str) -> String {
    let mut parts: Vec<&str> = version.trim().split('.').collect();
    if parts.len() == 4 && parts[3] == "0" {
        parts.pop();
    }
    parts.join(".")
}

#[cfg(target_os = "windows")]
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    Command::new("open").arg(url).spawn()?;
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(url).spawn()?;
    Ok(())
}
