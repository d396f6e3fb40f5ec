use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vncman_core::config::{resolve_config_path, ConfigManager};
use vncman_gui::{run_gui, GuiConfig};

#[derive(Parser)]
#[command(name = "vncman", version, about = "Organize VNC endpoints and launch a viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge devices from an exported JSON file into the configuration
    Import { file: PathBuf },
    /// Write the current configuration to a JSON file
    Export { file: PathBuf },
    /// Compare the running version against the published manifest
    CheckUpdate,
}

fn open_manager() -> Result<ConfigManager, Box<dyn std::error::Error>> {
    let path = resolve_config_path()?;
    Ok(ConfigManager::with_path(path))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = GuiConfig {
                app_version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            };
            run_gui(config)?;
        }
        Some(Commands::Import { file }) => {
            let mut manager = open_manager()?;
            let added = manager.import_merge(&file)?;
            println!(
                "Imported {added} new device(s) into {}",
                manager.config_path.display()
            );
        }
        Some(Commands::Export { file }) => {
            let manager = open_manager()?;
            manager.export_to(&file)?;
            println!(
                "Exported {} device(s) to {}",
                manager.device_total(),
                file.display()
            );
        }
        Some(Commands::CheckUpdate) => {
            let manifest = vncman_gui::fetch_update_manifest(vncman_gui::UPDATE_MANIFEST_URL)?;
            let current = env!("CARGO_PKG_VERSION");
            if vncman_gui::is_newer(&manifest.version, current) {
                println!(
                    "Update available: v{} (running v{})",
                    vncman_gui::trim_version(&manifest.version),
                    vncman_gui::trim_version(current)
                );
                if let Some(url) = manifest.download_url {
                    println!("Download: {url}");
                }
            } else {
                println!("v{} is up to date", vncman_gui::trim_version(current));
            }
        }
    }
    Ok(())
}
