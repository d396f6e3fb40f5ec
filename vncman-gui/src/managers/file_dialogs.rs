use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// Holds the receiving ends of in-flight native file dialogs. The dialogs run
/// on their own threads so the frame loop never blocks; `None` means no dialog
/// of that kind is open.
pub struct FileDialogManager {
    pub viewer_path_rx: Option<Receiver<Option<PathBuf>>>,
    pub data_path_rx: Option<Receiver<Option<PathBuf>>>,
    pub import_rx: Option<Receiver<Option<PathBuf>>>,
    pub export_rx: Option<Receiver<Option<PathBuf>>>,
}

impl FileDialogManager {
    pub fn new() -> Self {
        Self {
            viewer_path_rx: None,
            data_path_rx: None,
            import_rx: None,
            export_rx: None,
        }
    }
}

impl Default for FileDialogManager {
    fn default() -> Self {
        Self::new()
    }
}
