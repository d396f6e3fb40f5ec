//! Settings window: viewer executable path, working data file, and the
//! import/export entry points.

use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use super::styled_button;
use crate::{spawn_file_dialog_thread, GuiApp};
use vncman_core::config::save_settings;

impl GuiApp {
    pub(crate) fn render_settings_dialog(&mut self, ctx: &egui::Context) {
        if !self.settings_dialog.open {
            return;
        }
        let mut submit = false;
        let mut cancel = false;
        let mut browse_viewer = false;
        let mut browse_data = false;
        let mut do_import = false;
        let mut do_export = false;
        egui::Window::new("Settings")
            .id(egui::Id::new("settings_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("settings_fields")
                    .num_columns(3)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("VNC viewer");
                        ui.add(
                            egui::TextEdit::singleline(
                                &mut self.settings_dialog.viewer_path_input,
                            )
                            .desired_width(320.0),
                        );
                        if ui.button("Browse...").clicked() {
                            browse_viewer = true;
                        }
                        ui.end_row();

                        ui.label("Data file");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.settings_dialog.data_path_input)
                                .desired_width(320.0),
                        );
                        if ui.button("Browse...").clicked() {
                            browse_data = true;
                        }
                        ui.end_row();
                    });
                ui.add_space(8.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if styled_button(ui, "Import JSON").clicked() {
                        do_import = true;
                    }
                    if styled_button(ui, "Export JSON").clicked() {
                        do_export = true;
                    }
                });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if styled_button(ui, "Cancel").clicked() {
                        cancel = true;
                    }
                    if styled_button(ui, "Save").clicked() {
                        submit = true;
                    }
                });
            });
        if browse_viewer {
            self.browse_viewer_path();
        }
        if browse_data {
            self.browse_data_path();
        }
        if do_import {
            self.browse_import_file();
        }
        if do_export {
            self.browse_export_file();
        }
        if cancel {
            self.settings_dialog.open = false;
        }
        if submit {
            self.apply_settings();
        }
    }

    /// Applies the settings form. The viewer path must point at an existing
    /// executable; the window stays open when it does not.
    fn apply_settings(&mut self) {
        let viewer = self.settings_dialog.viewer_path_input.trim().to_string();
        if !Path::new(&viewer).is_file() {
            self.show_info(
                "Settings",
                &format!("Viewer executable not found at '{viewer}'"),
            );
            return;
        }
        self.settings.viewer_path = viewer;

        let data_path = self.settings_dialog.data_path_input.trim().to_string();
        if !data_path.is_empty() && Path::new(&data_path) != self.manager.config_path {
            self.manager.set_config_path(PathBuf::from(&data_path));
            self.status = format!("Loaded {}", self.manager.config_path.display());
        }
        self.settings.last_data_file_path =
            Some(self.manager.config_path.display().to_string());

        if let Err(err) = save_settings(&self.settings) {
            self.show_info("Settings", &err);
        } else {
            self.show_info("Settings", "Settings saved");
        }
        self.settings_dialog.open = false;
    }

    fn browse_viewer_path(&mut self) {
        if self.file_dialogs.viewer_path_rx.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.file_dialogs.viewer_path_rx = Some(rx);
        spawn_file_dialog_thread(move || {
            let selection = rfd::FileDialog::new()
                .set_title("Select VNC viewer executable")
                .pick_file();
            let _ = tx.send(selection);
        });
    }

    fn browse_data_path(&mut self) {
        if self.file_dialogs.data_path_rx.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.file_dialogs.data_path_rx = Some(rx);
        spawn_file_dialog_thread(move || {
            let selection = rfd::FileDialog::new()
                .set_title("Select device configuration file")
                .add_filter("JSON", &["json"])
                .pick_file();
            let _ = tx.send(selection);
        });
    }

    fn browse_import_file(&mut self) {
        if self.file_dialogs.import_rx.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.file_dialogs.import_rx = Some(rx);
        spawn_file_dialog_thread(move || {
            let selection = rfd::FileDialog::new()
                .set_title("Import devices from JSON")
                .add_filter("JSON", &["json"])
                .pick_file();
            let _ = tx.send(selection);
        });
    }

    fn browse_export_file(&mut self) {
        if self.file_dialogs.export_rx.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.file_dialogs.export_rx = Some(rx);
        spawn_file_dialog_thread(move || {
            let selection = rfd::FileDialog::new()
                .set_title("Export devices to JSON")
                .add_filter("JSON", &["json"])
                .set_file_name("vncman_export.json")
                .save_file();
            let _ = tx.send(selection);
        });
    }
}
