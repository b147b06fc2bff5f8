pub mod commands;
pub mod config;
pub mod content;
pub mod editor;
pub mod error;
pub mod guide;
pub mod intelligence;
pub mod state;
pub mod types;

use std::sync::Arc;

use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            use tauri::Manager;
            app.manage(Arc::new(AppState::new()));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_company_profile,
            commands::get_editor_view,
            commands::enter_edit,
            commands::update_draft_field,
            commands::cancel_edit,
            commands::save_edit,
            commands::generate_identity,
            commands::get_config_status,
            commands::get_landing_content,
            commands::get_storefront_guide,
            commands::get_guide_snippet,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
