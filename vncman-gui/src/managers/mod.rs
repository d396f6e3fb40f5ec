mod file_dialogs;

pub use file_dialogs::FileDialogManager;
