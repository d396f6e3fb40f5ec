pub mod io;
pub mod manager;
pub mod settings;

pub use io::{
    candidate_config_paths, load_or_bootstrap, resolve_config_path, sample_branches,
    CONFIG_FILE_NAME,
};
pub use manager::{ConfigManager, Confirm, CrudError};
pub use settings::{
    default_viewer_path, load_settings, load_settings_from, save_settings, save_settings_to,
    settings_path, AppSettings, SETTINGS_FILE_NAME,
};
