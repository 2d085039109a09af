// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
mod bridge;
mod commands;
mod dialog;
mod fs_checks;
mod models;
mod state;

use tauri_plugin_log::{Target, TargetKind};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Configure logging with stdout and per-app log directory targets
    let log_plugin = tauri_plugin_log::Builder::new()
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir { file_name: None }),
        ])
        .level(if cfg!(debug_assertions) {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        })
        .build();

    // The channel registry is built here, once, and handed to the app as
    // managed state; nothing registers channels after startup.
    let mut registry: bridge::BridgeRegistry<tauri::Wry> = bridge::BridgeRegistry::new();
    bridge::register_channels(&mut registry);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(log_plugin)
        .manage(registry)
        .manage(state::DialogGate::default())
        .invoke_handler(tauri::generate_handler![
            commands::dialog::open_file,
            commands::dialog::open_directory,
            commands::fs::is_a_file,
            commands::fs::is_directory,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
