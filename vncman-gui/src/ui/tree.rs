//! Main window: toolbar, status bar, and the branch/plant/device tree.

use eframe::egui;
use eframe::egui::RichText;

use crate::state::NameDialogTarget;
use crate::GuiApp;
use vncman_core::tree::{NodeKind, NodeRef, StatusColor};

/// Row interactions are collected while walking the tree and applied after the
/// walk, so rendering never mutates the view it is iterating.
enum TreeAction {
    Toggle(usize),
    Connect(usize, usize, usize),
    AddChild(NodeRef),
    Edit(NodeRef),
    Delete(NodeRef),
}

fn status_fill(status: StatusColor) -> egui::Color32 {
    match status {
        StatusColor::Online => egui::Color32::from_rgb(80, 200, 120),
        StatusColor::Warning => egui::Color32::from_rgb(230, 180, 60),
        StatusColor::Offline => egui::Color32::from_rgb(200, 80, 80),
    }
}

impl GuiApp {
    pub(crate) fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add Branch").clicked() {
                self.open_name_dialog(NameDialogTarget::AddBranch, "Add Branch", "Branch name", "");
            }
            if ui.button("Refresh").clicked() {
                self.manager.reload();
                self.status = format!("Reloaded {}", self.manager.config_path.display());
            }
            if ui.button("Settings").clicked() {
                self.open_settings_dialog();
            }
            if ui.button("Check for Updates").clicked() {
                self.check_for_updates(false);
            }
        });
    }

    pub(crate) fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} device(s)", self.manager.device_total()));
            ui.separator();
            ui.label(self.manager.config_path.display().to_string());
            if self.manager.dirty {
                ui.separator();
                ui.colored_label(egui::Color32::YELLOW, "Unsaved changes");
                if ui.small_button("Retry Save").clicked() {
                    let result = self.manager.retry_save();
                    match result {
                        Ok(()) => self.show_info("Configuration", "Configuration saved"),
                        Err(err) => self.show_info("Save Error", &err.to_string()),
                    }
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&self.status).weak());
            });
        });
    }

    pub(crate) fn render_tree(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.manager.view.roots.is_empty() {
                    ui.add_space(12.0);
                    ui.label("No branches configured. Use 'Add Branch' to get started.");
                    return;
                }
                let roots = self.manager.view.roots.clone();
                for root in roots {
                    self.render_node(ui, root, 0, &mut actions);
                }
            });
        for action in actions {
            self.apply_tree_action(action);
        }
    }

    fn render_node(&self, ui: &mut egui::Ui, id: usize, depth: usize, actions: &mut Vec<TreeAction>) {
        let node = &self.manager.view.nodes[id];
        ui.horizontal(|ui| {
            ui.add_space(depth as f32 * 20.0);
            if node.kind == NodeKind::Device {
                ui.add_space(20.0);
            } else {
                let arrow = if node.expanded { "\u{25bc}" } else { "\u{25b6}" };
                if ui.small_button(arrow).clicked() {
                    actions.push(TreeAction::Toggle(id));
                }
            }
            if let Some(status) = node.status {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 4.0, status_fill(status));
            }
            match node.kind {
                NodeKind::Branch => {
                    ui.label(RichText::new(&node.label).strong());
                }
                _ => {
                    ui.label(&node.label);
                }
            }
            if let Some(info) = &node.connection_info {
                ui.label(RichText::new(info).weak());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Delete").clicked() {
                    actions.push(TreeAction::Delete(node.record));
                }
                if ui.small_button("Edit").clicked() {
                    actions.push(TreeAction::Edit(node.record));
                }
                match node.record {
                    NodeRef::Branch(_) => {
                        if ui.small_button("Add Plant").clicked() {
                            actions.push(TreeAction::AddChild(node.record));
                        }
                    }
                    NodeRef::Plant(..) => {
                        if ui.small_button("Add Device").clicked() {
                            actions.push(TreeAction::AddChild(node.record));
                        }
                    }
                    NodeRef::Device(b, p, d) => {
                        if ui.small_button("Connect").clicked() {
                            actions.push(TreeAction::Connect(b, p, d));
                        }
                    }
                }
            });
        });
        if node.expanded {
            let children = node.children.clone();
            for child in children {
                self.render_node(ui, child, depth + 1, actions);
            }
        }
    }

    fn apply_tree_action(&mut self, action: TreeAction) {
        match action {
            TreeAction::Toggle(id) => self.manager.toggle_expanded(id),
            TreeAction::Connect(b, p, d) => self.connect_device(b, p, d),
            TreeAction::AddChild(NodeRef::Branch(b)) => {
                self.open_name_dialog(
                    NameDialogTarget::AddPlant { branch: b },
                    "Add Plant",
                    "Plant name",
                    "",
                );
            }
            TreeAction::AddChild(NodeRef::Plant(b, p)) => self.open_device_dialog_add(b, p),
            TreeAction::AddChild(NodeRef::Device(..)) => {}
            TreeAction::Edit(NodeRef::Branch(b)) => {
                let current = self
                    .manager
                    .branch_at(b)
                    .map(|x| x.name.clone())
                    .unwrap_or_default();
                self.open_name_dialog(
                    NameDialogTarget::EditBranch { branch: b },
                    "Edit Branch",
                    "Branch name",
                    &current,
                );
            }
            TreeAction::Edit(NodeRef::Plant(b, p)) => {
                let current = self
                    .manager
                    .plant_at(b, p)
                    .map(|x| x.name.clone())
                    .unwrap_or_default();
                self.open_name_dialog(
                    NameDialogTarget::EditPlant { branch: b, plant: p },
                    "Edit Plant",
                    "Plant name",
                    &current,
                );
            }
            TreeAction::Edit(NodeRef::Device(b, p, d)) => {
                self.open_device_dialog_edit((b, p, d));
            }
            TreeAction::Delete(record) => self.open_confirm_dialog(record),
        }
    }
}
