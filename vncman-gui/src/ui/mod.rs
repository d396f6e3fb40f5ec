use eframe::egui;

mod dialogs;
mod settings;
mod tree;
mod widgets;

pub(crate) use widgets::styled_button;

pub(crate) const BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(88.0, 26.0);
