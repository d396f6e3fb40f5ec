//! Modal dialogs: name entry, device editor, delete confirmation, update
//! prompt, and toast notifications.

use eframe::egui;
use eframe::egui::RichText;
use std::time::{Duration, Instant};

use super::styled_button;
use crate::state::{DeviceDialogMode, NameDialogTarget};
use crate::updater::open_in_browser;
use crate::GuiApp;

impl GuiApp {
    pub(crate) fn render_name_dialog(&mut self, ctx: &egui::Context) {
        if !self.name_dialog.open {
            return;
        }
        let mut submit = false;
        let mut cancel = false;
        let title = self.name_dialog.title.clone();
        egui::Window::new(title)
            .id(egui::Id::new("name_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&self.name_dialog.label);
                    let response = ui.text_edit_singleline(&mut self.name_dialog.input);
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                });
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if styled_button(ui, "Cancel").clicked() {
                        cancel = true;
                    }
                    if styled_button(ui, "OK").clicked() {
                        submit = true;
                    }
                });
            });
        if cancel {
            self.name_dialog.open = false;
        }
        if submit {
            let input = self.name_dialog.input.clone();
            let result = match self.name_dialog.target {
                NameDialogTarget::AddBranch => self.manager.add_branch(&input),
                NameDialogTarget::AddPlant { branch } => self.manager.add_plant(branch, &input),
                NameDialogTarget::EditBranch { branch } => self.manager.edit_branch(branch, &input),
                NameDialogTarget::EditPlant { branch, plant } => {
                    self.manager.edit_plant(branch, plant, &input)
                }
            };
            if self.report_crud("Configuration", result) {
                self.name_dialog.open = false;
            }
        }
    }

    pub(crate) fn render_device_dialog(&mut self, ctx: &egui::Context) {
        if !self.device_dialog.open {
            return;
        }
        let mut submit = false;
        let mut cancel = false;
        let title = self.device_dialog.title.clone();
        let branch_names: Vec<String> = self
            .manager
            .branches
            .iter()
            .map(|b| b.name.clone())
            .collect();
        let plant_names: Vec<String> = self
            .manager
            .branch_at(self.device_dialog.branch_idx)
            .map(|b| b.plants.iter().map(|p| p.name.clone()).collect())
            .unwrap_or_default();
        egui::Window::new(title)
            .id(egui::Id::new("device_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("device_fields")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Branch");
                        egui::ComboBox::from_id_source("device_branch")
                            .selected_text(
                                branch_names
                                    .get(self.device_dialog.branch_idx)
                                    .cloned()
                                    .unwrap_or_default(),
                            )
                            .show_ui(ui, |ui| {
                                for (i, name) in branch_names.iter().enumerate() {
                                    ui.selectable_value(
                                        &mut self.device_dialog.branch_idx,
                                        i,
                                        name,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Plant");
                        egui::ComboBox::from_id_source("device_plant")
                            .selected_text(
                                plant_names
                                    .get(self.device_dialog.plant_idx)
                                    .cloned()
                                    .unwrap_or_default(),
                            )
                            .show_ui(ui, |ui| {
                                for (i, name) in plant_names.iter().enumerate() {
                                    ui.selectable_value(
                                        &mut self.device_dialog.plant_idx,
                                        i,
                                        name,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Name");
                        ui.text_edit_singleline(&mut self.device_dialog.fields.name);
                        ui.end_row();

                        ui.label("IP Address");
                        ui.text_edit_singleline(&mut self.device_dialog.fields.ip);
                        ui.end_row();

                        ui.label("Port");
                        ui.text_edit_singleline(&mut self.device_dialog.fields.port);
                        ui.end_row();

                        ui.label("Password");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.device_dialog.fields.password)
                                .password(true),
                        );
                        ui.end_row();
                    });
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if styled_button(ui, "Cancel").clicked() {
                        cancel = true;
                    }
                    if styled_button(ui, "OK").clicked() {
                        submit = true;
                    }
                });
            });
        // Switching branches can leave the plant index past the end.
        if self.device_dialog.plant_idx >= plant_names.len() {
            self.device_dialog.plant_idx = 0;
        }
        if cancel {
            self.device_dialog.open = false;
        }
        if submit {
            let branch = self.device_dialog.branch_idx;
            let plant = self.device_dialog.plant_idx;
            if self.manager.plant_at(branch, plant).is_none() {
                self.show_info("Validation", "Select a branch and plant for the device");
                return;
            }
            let fields = self.device_dialog.fields.clone();
            let result = match self.device_dialog.mode {
                DeviceDialogMode::Add => self.manager.add_device(branch, plant, &fields),
                DeviceDialogMode::Edit { location } => {
                    self.manager.edit_device(location, &fields, (branch, plant))
                }
            };
            if self.report_crud("Configuration", result) {
                self.device_dialog.open = false;
            }
        }
    }

    pub(crate) fn render_update_dialog(&mut self, ctx: &egui::Context) {
        if !self.update_dialog.open {
            return;
        }
        let Some(manifest) = self.update_dialog.manifest.clone() else {
            self.update_dialog.open = false;
            return;
        };
        let mut close = false;
        let mut accepted = false;
        let mut open_changelog = false;
        egui::Window::new("Update Available")
            .id(egui::Id::new("update_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Version {} is available (you are running {}).",
                    crate::trim_version(&manifest.version),
                    crate::trim_version(&self.update_dialog.current_version)
                ));
                if manifest.changelog_url.is_some() && ui.link("View changelog").clicked() {
                    open_changelog = true;
                }
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if styled_button(ui, "Later").clicked() {
                        close = true;
                    }
                    if manifest.download_url.is_some() && styled_button(ui, "Download").clicked() {
                        accepted = true;
                    }
                });
            });
        if open_changelog {
            if let Some(url) = manifest.changelog_url.as_deref() {
                if let Err(err) = open_in_browser(url) {
                    self.show_info("Updater", &format!("Failed to open changelog: {err}"));
                }
            }
        }
        if accepted {
            if let Some(url) = manifest.download_url.as_deref() {
                match open_in_browser(url) {
                    Ok(()) => {
                        // The installer takes over from here.
                        close = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    Err(err) => {
                        self.show_info("Updater", &format!("Failed to open download page: {err}"))
                    }
                }
            }
        }
        if close {
            self.update_dialog.open = false;
        }
    }

    /// Modal delete confirmation: a blocking overlay with a centered dialog.
    /// The held action only runs when the user clicks the action button.
    pub(crate) fn render_confirm_dialog(&mut self, ctx: &egui::Context) {
        if !self.confirm_dialog.open {
            return;
        }

        let screen_rect = ctx.screen_rect();
        egui::Area::new(egui::Id::new("modal_blocker"))
            .order(egui::Order::Middle)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                ui.allocate_rect(screen_rect, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(220));
            });

        let center = screen_rect.center();
        egui::Area::new(egui::Id::new("modal_dialog"))
            .order(egui::Order::Foreground)
            .pivot(egui::Align2::CENTER_CENTER)
            .fixed_pos(center)
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .rounding(egui::Rounding::same(6.0))
                    .show(ui, |ui| {
                        ui.heading(&self.confirm_dialog.title);
                        ui.label(&self.confirm_dialog.message);
                        ui.horizontal(|ui| {
                            if styled_button(ui, "Cancel").clicked() {
                                self.confirm_dialog.open = false;
                                self.confirm_dialog.action = None;
                            }
                            if styled_button(ui, &self.confirm_dialog.action_label).clicked() {
                                if let Some(action) = self.confirm_dialog.action {
                                    self.perform_confirm_action(action);
                                }
                                self.confirm_dialog.open = false;
                                self.confirm_dialog.action = None;
                            }
                        });
                    });
            });
    }

    /// Toast notifications stacked at the top-right, expiring on their own.
    pub(crate) fn render_info_dialog(&mut self, ctx: &egui::Context) {
        let notifications = self.notification_handler.get_all_notifications();
        if notifications.is_empty() {
            return;
        }

        let now = Instant::now();
        let screen_rect = ctx.screen_rect();
        let max_width = 380.0;
        let mut y = screen_rect.min.y + 32.0;
        let x = screen_rect.max.x - 8.0;
        let total = 3.0;
        for (idx, notification) in notifications.iter().enumerate() {
            let age = now.duration_since(notification.created_at).as_secs_f32();
            if age >= total {
                continue;
            }
            egui::Area::new(egui::Id::new(("info_toast", idx)))
                .order(egui::Order::Foreground)
                .interactable(false)
                .pivot(egui::Align2::RIGHT_TOP)
                .fixed_pos(egui::pos2(x, y))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .rounding(egui::Rounding::same(6.0))
                        .show(ui, |ui| {
                            ui.set_max_width(max_width);
                            ui.label(RichText::new(&notification.title).strong().size(15.0));
                            ui.label(RichText::new(&notification.message).size(13.0));
                        });
                });
            y += 64.0;
        }
        self.notification_handler.cleanup_old_notifications(total);
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
