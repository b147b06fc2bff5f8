//! Tauri command surface for the webview.
//!
//! Thin wrappers over `AppState`: commands lock, delegate, and log latency.
//! Everything returns `Result<T, String>` so the frontend gets a displayable
//! message instead of a structured error it would have to unpack.

use std::sync::Arc;
use std::time::Instant;

use tauri::State;

use crate::content::{self, LandingContent};
use crate::editor::DraftField;
use crate::guide::{self, GuideSnippet, StorefrontGuide};
use crate::state::AppState;
use crate::types::{CompanyProfile, ConfigStatus, EditorView};

/// Soft latency budget for the synchronous commands. These all resolve from
/// in-memory state, so anything slower deserves a log line.
const SYNC_BUDGET_MS: u128 = 50;

fn log_command_latency(command: &str, started: Instant, budget_ms: u128) {
    let elapsed_ms = started.elapsed().as_millis();
    if elapsed_ms > budget_ms {
        log::warn!(
            "{} exceeded latency budget: {}ms > {}ms",
            command,
            elapsed_ms,
            budget_ms
        );
    } else {
        log::debug!("{} completed in {}ms", command, elapsed_ms);
    }
}

/// The committed identity texts.
#[tauri::command]
pub fn get_company_profile(state: State<Arc<AppState>>) -> Result<CompanyProfile, String> {
    state.profile_snapshot()
}

/// Current editor snapshot (mode, draft, generation state).
#[tauri::command]
pub fn get_editor_view(state: State<Arc<AppState>>) -> Result<EditorView, String> {
    state.editor_view()
}

/// Open the editor, seeding the draft from the committed profile.
#[tauri::command]
pub fn enter_edit(state: State<Arc<AppState>>) -> Result<EditorView, String> {
    let started = Instant::now();
    let result = state.enter_edit();
    log_command_latency("enter_edit", started, SYNC_BUDGET_MS);
    result
}

/// Replace one draft field with the given value.
#[tauri::command]
pub fn update_draft_field(
    state: State<Arc<AppState>>,
    field: DraftField,
    value: String,
) -> Result<EditorView, String> {
    let started = Instant::now();
    let result = state.update_draft_field(field, value);
    log_command_latency("update_draft_field", started, SYNC_BUDGET_MS);
    result
}

/// Discard the draft and return to viewing.
#[tauri::command]
pub fn cancel_edit(state: State<Arc<AppState>>) -> Result<EditorView, String> {
    let started = Instant::now();
    let result = state.cancel_edit();
    log_command_latency("cancel_edit", started, SYNC_BUDGET_MS);
    result
}

/// Commit the draft as the new profile.
#[tauri::command]
pub fn save_edit(state: State<Arc<AppState>>) -> Result<CompanyProfile, String> {
    let started = Instant::now();
    let result = state.save_edit();
    log_command_latency("save_edit", started, SYNC_BUDGET_MS);
    result
}

/// Ask the generative service for fresh identity copy and apply it to the
/// draft. Rejected while a request is already in flight.
#[tauri::command]
pub async fn generate_identity(
    state: State<'_, Arc<AppState>>,
) -> Result<EditorView, String> {
    let started = Instant::now();
    let result = state.generate_identity().await;
    // Network-bound; budget is the client timeout, not the sync budget.
    log_command_latency("generate_identity", started, 30_000);
    result
}

/// Whether AI generation is available, and which model it uses.
#[tauri::command]
pub fn get_config_status(state: State<Arc<AppState>>) -> Result<ConfigStatus, String> {
    state.config_status()
}

/// The static landing page content document.
#[tauri::command]
pub fn get_landing_content() -> Result<LandingContent, String> {
    content::landing()
}

/// The storefront porting guide.
#[tauri::command]
pub fn get_storefront_guide() -> Result<StorefrontGuide, String> {
    Ok(guide::storefront_guide())
}

/// Resolve a guide snippet for the copy button.
#[tauri::command]
pub fn get_guide_snippet(id: String) -> Result<GuideSnippet, String> {
    guide::snippet_by_id(&guide::storefront_guide(), &id)
        .ok_or_else(|| format!("Unknown snippet: {}", id))
}
