//! Spawns the external VNC viewer for a selected device.

use sitetree::Device;
use std::io;
use std::path::Path;
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum LaunchError {
    #[error("viewer executable not found at '{0}'; set the path in Settings")]
    ViewerNotFound(String),
    #[error("failed to start viewer: {0}")]
    Spawn(#[from] io::Error),
}

/// Command-line arguments the viewer expects for a device. The password flag
/// is only present when the device carries a non-empty password.
pub fn build_viewer_args(device: &Device) -> Vec<String> {
    let mut args = vec![
        format!("-host={}", device.ip),
        format!("-port={}", device.port),
    ];
    if let Some(password) = device.password.as_deref() {
        if !password.is_empty() {
            args.push(format!("-password={password}"));
        }
    }
    args
}

/// Launches the viewer for `device`. A missing executable is reported without
/// spawning anything; a permission-denied spawn gets one retry through the
/// platform elevation helper.
pub fn launch_viewer(viewer_path: &str, device: &Device) -> Result<(), LaunchError> {
    if !Path::new(viewer_path).is_file() {
        return Err(LaunchError::ViewerNotFound(viewer_path.to_string()));
    }
    let args = build_viewer_args(device);
    match Command::new(viewer_path).args(&args).spawn() {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            log::warn!("Viewer spawn denied, retrying elevated: {err}");
            spawn_elevated(viewer_path, &args)?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(windows)]
fn spawn_elevated(viewer_path: &str, args: &[String]) -> Result<(), io::Error> {
    let arg_list = args
        .iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(",");
    Command::new("powershell")
        .args(["-NoProfile", "-Command"])
        .arg(format!(
            "Start-Process -Verb RunAs -FilePath '{viewer_path}' -ArgumentList {arg_list}"
        ))
        .spawn()?;
    Ok(())
}

#[cfg(not(windows))]
fn spawn_elevated(viewer_path: &str, args: &[String]) -> Result<(), io::Error> {
    Command::new("pkexec").arg(viewer_path).args(args).spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(password: Option<&str>) -> Device {
        Device {
            name: "PC".to_string(),
            ip: "192.168.1.10".to_string(),
            port: 5901,
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn args_without_password() {
        assert_eq!(
            build_viewer_args(&device(None)),
            vec!["-host=192.168.1.10", "-port=5901"]
        );
    }

    #[test]
    fn args_with_password() {
        assert_eq!(
            build_viewer_args(&device(Some("s3cret"))),
            vec!["-host=192.168.1.10", "-port=5901", "-password=s3cret"]
        );
    }

    #[test]
    fn empty_password_is_omitted() {
        assert_eq!(build_viewer_args(&device(Some(""))).len(), 2);
    }

    #[test]
    fn missing_viewer_is_reported_without_spawning() {
        let err = launch_viewer("/no/such/viewer", &device(None)).unwrap_err();
        assert!(matches!(err, LaunchError::ViewerNotFound(_)));
    }
}
