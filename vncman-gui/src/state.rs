//! Small action enums shared between dialog state and the frame loop.

/// Which record a pending name dialog creates or renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameDialogTarget {
    AddBranch,
    AddPlant { branch: usize },
    EditBranch { branch: usize },
    EditPlant { branch: usize, plant: usize },
}

/// Add vs edit mode for the device dialog. Edit keeps the original location so
/// a changed plant selection becomes a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeviceDialogMode {
    Add,
    Edit { location: (usize, usize, usize) },
}

/// Destructive operation held back until the user confirms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmAction {
    DeleteBranch(usize),
    DeletePlant(usize, usize),
    DeleteDevice(usize, usize, usize),
}
