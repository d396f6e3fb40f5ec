use crate::state::{ConfirmAction, DeviceDialogMode, NameDialogTarget};
use crate::updater::UpdateManifest;
use vncman_core::validation::DeviceFields;

pub(crate) struct NameDialogState {
    pub open: bool,
    pub title: String,
    pub label: String,
    pub input: String,
    pub target: NameDialogTarget,
}

impl Default for NameDialogState {
    fn default() -> Self {
        Self {
            open: false,
            title: String::new(),
            label: String::new(),
            input: String::new(),
            target: NameDialogTarget::AddBranch,
        }
    }
}

pub(crate) struct DeviceDialogState {
    pub open: bool,
    pub title: String,
    pub mode: DeviceDialogMode,
    /// Combo selections for the parent plant.
    pub branch_idx: usize,
    pub plant_idx: usize,
    pub fields: DeviceFields,
}

impl Default for DeviceDialogState {
    fn default() -> Self {
        Self {
            open: false,
            title: String::new(),
            mode: DeviceDialogMode::Add,
            branch_idx: 0,
            plant_idx: 0,
            fields: DeviceFields::default(),
        }
    }
}

#[derive(Default)]
pub(crate) struct ConfirmDialogState {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub action: Option<ConfirmAction>,
}

#[derive(Default)]
pub(crate) struct SettingsDialogState {
    pub open: bool,
    pub viewer_path_input: String,
    pub data_path_input: String,
}

#[derive(Default)]
pub(crate) struct UpdateDialogState {
    pub open: bool,
    pub current_version: String,
    pub manifest: Option<UpdateManifest>,
}
