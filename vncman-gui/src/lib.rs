use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;

// Operation modules
mod dialog_polling;

// Core modules
mod launcher;
mod managers;
mod notification_handler;
mod notifications;
mod state;
mod ui;
mod ui_state;
mod updater;
mod utils;

pub use launcher::{build_viewer_args, launch_viewer, LaunchError};
pub use updater::{
    fetch_update_manifest, is_newer, trim_version, UpdateManifest, UPDATE_MANIFEST_URL,
};

use managers::FileDialogManager;
use notification_handler::NotificationHandler;
use state::{ConfirmAction, DeviceDialogMode, NameDialogTarget};
use utils::spawn_file_dialog_thread;
use vncman_core::config::{
    load_settings, resolve_config_path, AppSettings, ConfigManager, Confirm, CrudError,
};
use vncman_core::tree::NodeRef;
use vncman_core::validation::DeviceFields;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Version the update check compares against. The binary passes its own
    /// package version here so the GUI and CLI checks always agree.
    pub app_version: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "VNC Manager".to_string(),
            width: 1100.0,
            height: 720.0,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Runs the desktop application: resolves the working configuration file
/// (preferring the remembered path from the process settings), builds the
/// manager, and enters the eframe event loop.
pub fn run_gui(config: GuiConfig) -> Result<(), GuiError> {
    let settings = load_settings();
    let config_path = match settings.last_data_file_path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path().map_err(GuiError::Gui)?,
    };
    let manager = ConfigManager::with_path(config_path);
    let app_version = config.app_version.clone();

    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(manager, settings, app_version))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

pub struct GuiApp {
    manager: ConfigManager,
    settings: AppSettings,
    notification_handler: NotificationHandler,
    file_dialogs: FileDialogManager,
    name_dialog: ui_state::NameDialogState,
    device_dialog: ui_state::DeviceDialogState,
    confirm_dialog: ui_state::ConfirmDialogState,
    settings_dialog: ui_state::SettingsDialogState,
    update_dialog: ui_state::UpdateDialogState,
    update_rx: Option<mpsc::Receiver<Result<UpdateManifest, String>>>,
    /// Suppresses the "up to date" toast for the automatic startup check.
    update_check_silent: bool,
    app_version: String,
    status: String,
}

impl GuiApp {
    fn new(manager: ConfigManager, settings: AppSettings, app_version: String) -> Self {
        let mut app = Self {
            manager,
            settings,
            notification_handler: NotificationHandler::new(),
            file_dialogs: FileDialogManager::new(),
            name_dialog: Default::default(),
            device_dialog: Default::default(),
            confirm_dialog: Default::default(),
            settings_dialog: Default::default(),
            update_dialog: Default::default(),
            update_rx: None,
            update_check_silent: false,
            app_version,
            status: String::new(),
        };
        app.status = format!("Loaded {}", app.manager.config_path.display());
        app.check_for_updates(true);
        app
    }

    pub(crate) fn show_info(&mut self, title: &str, message: &str) {
        self.notification_handler.show_info(title, message);
    }

    /// Routes a CRUD result to the user. Returns whether the in-memory tree
    /// was changed, which decides if the originating dialog closes: a failed
    /// save still applied the edit, so the dialog closes and a retry stays
    /// available, while a validation error keeps the dialog open.
    pub(crate) fn report_crud(&mut self, title: &str, result: Result<(), CrudError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err @ CrudError::Validation(_)) => {
                self.show_info("Validation", &err.to_string());
                false
            }
            Err(err @ CrudError::Persistence(_)) => {
                self.show_info(title, &err.to_string());
                true
            }
            Err(err) => {
                self.show_info(title, &err.to_string());
                false
            }
        }
    }

    pub(crate) fn connect_device(&mut self, branch: usize, plant: usize, device: usize) {
        let Some(device) = self.manager.device_at(branch, plant, device).cloned() else {
            return;
        };
        match launch_viewer(&self.settings.viewer_path, &device) {
            Ok(()) => {
                self.status = format!("Connecting to {}", device.endpoint());
                let msg = self.status.clone();
                self.show_info("Viewer", &msg);
            }
            Err(err) => {
                self.show_info("Connection Error", &format!("{}: {err}", device.name));
            }
        }
    }

    pub(crate) fn open_name_dialog(
        &mut self,
        target: NameDialogTarget,
        title: &str,
        label: &str,
        current: &str,
    ) {
        self.name_dialog.open = true;
        self.name_dialog.target = target;
        self.name_dialog.title = title.to_string();
        self.name_dialog.label = label.to_string();
        self.name_dialog.input = current.to_string();
    }

    pub(crate) fn open_device_dialog_add(&mut self, branch: usize, plant: usize) {
        self.device_dialog = Default::default();
        self.device_dialog.open = true;
        self.device_dialog.title = "Add Device".to_string();
        self.device_dialog.mode = DeviceDialogMode::Add;
        self.device_dialog.branch_idx = branch;
        self.device_dialog.plant_idx = plant;
        self.device_dialog.fields.port = sitetree::DEFAULT_VNC_PORT.to_string();
    }

    pub(crate) fn open_device_dialog_edit(&mut self, location: (usize, usize, usize)) {
        let (branch, plant, device) = location;
        let Some(device) = self.manager.device_at(branch, plant, device) else {
            return;
        };
        self.device_dialog = Default::default();
        self.device_dialog.open = true;
        self.device_dialog.title = "Edit Device".to_string();
        self.device_dialog.mode = DeviceDialogMode::Edit { location };
        self.device_dialog.branch_idx = branch;
        self.device_dialog.plant_idx = plant;
        self.device_dialog.fields = DeviceFields::from_device(device);
    }

    pub(crate) fn open_confirm_dialog(&mut self, record: NodeRef) {
        let (name, action) = match record {
            NodeRef::Branch(b) => (
                self.manager.branch_at(b).map(|x| x.name.clone()),
                ConfirmAction::DeleteBranch(b),
            ),
            NodeRef::Plant(b, p) => (
                self.manager.plant_at(b, p).map(|x| x.name.clone()),
                ConfirmAction::DeletePlant(b, p),
            ),
            NodeRef::Device(b, p, d) => (
                self.manager.device_at(b, p, d).map(|x| x.name.clone()),
                ConfirmAction::DeleteDevice(b, p, d),
            ),
        };
        let Some(name) = name else { return };
        self.confirm_dialog.open = true;
        self.confirm_dialog.title = "Confirm Delete".to_string();
        self.confirm_dialog.message = format!("Are you sure you want to delete '{name}'?");
        self.confirm_dialog.action_label = "Delete".to_string();
        self.confirm_dialog.action = Some(action);
    }

    pub(crate) fn perform_confirm_action(&mut self, action: ConfirmAction) {
        let result = match action {
            ConfirmAction::DeleteBranch(b) => self.manager.delete_branch(b, Confirm::Yes),
            ConfirmAction::DeletePlant(b, p) => self.manager.delete_plant(b, p, Confirm::Yes),
            ConfirmAction::DeleteDevice(b, p, d) => {
                self.manager.delete_device(b, p, d, Confirm::Yes)
            }
        };
        if self.report_crud("Delete", result) {
            self.status = "Deleted".to_string();
        }
    }

    pub(crate) fn open_settings_dialog(&mut self) {
        self.settings_dialog.open = true;
        self.settings_dialog.viewer_path_input = self.settings.viewer_path.clone();
        self.settings_dialog.data_path_input =
            self.manager.config_path.display().to_string();
    }

    /// Kicks off an update check on a worker thread. `silent` skips the
    /// "up to date" toast so the startup check only speaks when there is
    /// something to say.
    pub(crate) fn check_for_updates(&mut self, silent: bool) {
        if self.update_rx.is_some() {
            // A manual request makes the in-flight check report its result.
            self.update_check_silent = self.update_check_silent && silent;
            return;
        }
        self.update_check_silent = silent;
        let (tx, rx) = mpsc::channel();
        self.update_rx = Some(rx);
        std::thread::spawn(move || {
            let _ = tx.send(fetch_update_manifest(UPDATE_MANIFEST_URL));
        });
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_file_dialogs();
        self.poll_update_check();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_tree(ui);
        });

        self.render_name_dialog(ctx);
        self.render_device_dialog(ctx);
        self.render_settings_dialog(ctx);
        self.render_update_dialog(ctx);
        self.render_confirm_dialog(ctx);
        self.render_info_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_version(dir: &tempfile::TempDir, version: &str) -> GuiApp {
        let manager = ConfigManager::with_path(dir.path().join("devices_config.json"));
        GuiApp::new(manager, AppSettings::default(), version.to_string())
    }

    #[test]
    fn manual_check_unsilences_an_in_flight_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app_with_version(&dir, "1.0.0");

        // The startup check is still pending and silent.
        assert!(app.update_rx.is_some());
        assert!(app.update_check_silent);

        app.check_for_updates(false);
        assert!(!app.update_check_silent);
    }

    #[test]
    fn update_dialog_compares_against_the_configured_version() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app_with_version(&dir, "1.0.0");

        let (tx, rx) = mpsc::channel();
        app.update_rx = Some(rx);
        tx.send(Ok(UpdateManifest {
            version: "1.0.1".to_string(),
            download_url: None,
            changelog_url: None,
        }))
        .expect("send manifest");

        app.poll_update_check();
        assert!(app.update_dialog.open);
        assert_eq!(app.update_dialog.current_version, "1.0.0");
    }

    #[test]
    fn matching_remote_version_opens_no_dialog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app_with_version(&dir, "1.0.0");

        let (tx, rx) = mpsc::channel();
        app.update_rx = Some(rx);
        tx.send(Ok(UpdateManifest {
            version: "1.0.0".to_string(),
            download_url: None,
            changelog_url: None,
        }))
        .expect("send manifest");

        app.poll_update_check();
        assert!(!app.update_dialog.open);
        assert!(app.update_rx.is_none());
    }
}
