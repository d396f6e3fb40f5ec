//! Per-frame polling of background work: native file dialogs and the update
//! check all run on their own threads and report back over channels.

use crate::{is_newer, trim_version, GuiApp};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Drains a one-shot dialog channel. Returns `Some(selection)` once the
/// dialog thread has answered and clears the slot, including when the thread
/// died without sending.
fn take_dialog_result(slot: &mut Option<Receiver<Option<PathBuf>>>) -> Option<Option<PathBuf>> {
    let result = match slot {
        Some(rx) => match rx.try_recv() {
            Ok(selection) => Some(selection),
            Err(TryRecvError::Disconnected) => Some(None),
            Err(TryRecvError::Empty) => return None,
        },
        None => return None,
    };
    *slot = None;
    result
}

impl GuiApp {
    pub(crate) fn poll_file_dialogs(&mut self) {
        if let Some(selection) = take_dialog_result(&mut self.file_dialogs.viewer_path_rx) {
            if let Some(path) = selection {
                self.settings_dialog.viewer_path_input = path.display().to_string();
            }
        }
        if let Some(selection) = take_dialog_result(&mut self.file_dialogs.data_path_rx) {
            if let Some(path) = selection {
                self.settings_dialog.data_path_input = path.display().to_string();
            }
        }
        if let Some(selection) = take_dialog_result(&mut self.file_dialogs.import_rx) {
            if let Some(path) = selection {
                let result = self.manager.import_merge(&path);
                match result {
                    Ok(added) => {
                        self.status = format!("Imported {added} new device(s)");
                        let msg = format!(
                            "Imported {added} new device(s) from '{}'",
                            path.display()
                        );
                        self.show_info("Import", &msg);
                    }
                    Err(err) => self.show_info("Import Error", &err.to_string()),
                }
            }
        }
        if let Some(selection) = take_dialog_result(&mut self.file_dialogs.export_rx) {
            if let Some(path) = selection {
                let result = self.manager.export_to(&path);
                match result {
                    Ok(()) => {
                        let msg = format!(
                            "Exported {} device(s) to '{}'",
                            self.manager.device_total(),
                            path.display()
                        );
                        self.show_info("Export", &msg);
                    }
                    Err(err) => self.show_info("Export Error", &err.to_string()),
                }
            }
        }
    }

    pub(crate) fn poll_update_check(&mut self) {
        let outcome = match &self.update_rx {
            Some(rx) => match rx.try_recv() {
                Ok(result) => Some(Some(result)),
                Err(TryRecvError::Disconnected) => Some(None),
                Err(TryRecvError::Empty) => None,
            },
            None => None,
        };
        let Some(outcome) = outcome else { return };
        self.update_rx = None;
        let Some(result) = outcome else { return };
        match result {
            Ok(manifest) => {
                let current = self.app_version.clone();
                if is_newer(&manifest.version, &current) {
                    self.update_dialog.open = true;
                    self.update_dialog.current_version = current;
                    self.update_dialog.manifest = Some(manifest);
                } else if !self.update_check_silent {
                    let msg = format!("v{} is up to date", trim_version(&current));
                    self.show_info("Updater", &msg);
                }
            }
            Err(err) => {
                if !self.update_check_silent {
                    self.show_info("Updater", &err);
                } else {
                    log::warn!("Startup update check failed: {err}");
                }
            }
        }
    }
}
