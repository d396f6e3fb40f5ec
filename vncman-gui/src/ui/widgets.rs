//! Shared UI widgets used across the dialogs.

use eframe::egui;

/// Creates a styled button with consistent sizing.
pub fn styled_button(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add_sized(
        super::BUTTON_SIZE,
        egui::Button::new(label).min_size(super::BUTTON_SIZE),
    )
}
