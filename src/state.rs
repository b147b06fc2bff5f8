//! Application state managed by Tauri.
//!
//! `AppState` owns the committed profile and the editor session behind
//! `Mutex` fields, and the command layer in `commands.rs` is a thin wrapper
//! over the methods here. Lock discipline: `editor` before `profile`, and
//! never across the generation await.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::config::{self, Config};
use crate::editor::{DraftField, EditorSession, GenerationOutcome};
use crate::error::GenerateError;
use crate::intelligence::gemini::GeminiClient;
use crate::intelligence::prompts::DEFAULT_BUSINESS_CONTEXT;
use crate::intelligence::ContentGenerator;
use crate::types::{CompanyProfile, ConfigStatus, EditorView};

pub struct AppState {
    pub profile: Mutex<CompanyProfile>,
    pub editor: Mutex<EditorSession>,
    pub config: Mutex<Option<Config>>,
    /// Built lazily from config on first use; tests inject fakes.
    generator: Mutex<Option<Arc<dyn ContentGenerator>>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = match config::load_config() {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("{}. AI generation disabled.", e);
                None
            }
        };
        Self::with_config(config)
    }

    pub fn with_config(config: Option<Config>) -> Self {
        Self {
            profile: Mutex::new(CompanyProfile::default_profile()),
            editor: Mutex::new(EditorSession::new()),
            config: Mutex::new(config),
            generator: Mutex::new(None),
        }
    }

    /// Replace the generator (tests, or a future settings screen).
    pub fn set_generator(&self, generator: Arc<dyn ContentGenerator>) {
        if let Ok(mut guard) = self.generator.lock() {
            *guard = Some(generator);
        }
    }

    fn generator(&self) -> Result<Arc<dyn ContentGenerator>, String> {
        let mut guard = self.generator.lock().map_err(|_| "Lock poisoned")?;
        if let Some(ref generator) = *guard {
            return Ok(generator.clone());
        }

        let config = self
            .config
            .lock()
            .map_err(|_| "Lock poisoned")?
            .clone()
            .unwrap_or_default();
        let api_key = config::resolve_api_key(&config).ok_or_else(|| {
            GenerateError::NoApiKey.to_string()
        })?;
        let client =
            Arc::new(GeminiClient::new(api_key, config.model).map_err(|e| e.to_string())?);
        *guard = Some(client.clone());
        Ok(client)
    }

    pub fn business_context(&self) -> String {
        self.config
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().and_then(|c| c.business_context.clone()))
            .unwrap_or_else(|| DEFAULT_BUSINESS_CONTEXT.to_string())
    }

    // ------------------------------------------------------------------
    // Profile + editor operations
    // ------------------------------------------------------------------

    pub fn profile_snapshot(&self) -> Result<CompanyProfile, String> {
        self.profile
            .lock()
            .map(|p| p.clone())
            .map_err(|_| "Lock poisoned".to_string())
    }

    pub fn editor_view(&self) -> Result<EditorView, String> {
        self.editor
            .lock()
            .map(|session| EditorView::from(&*session))
            .map_err(|_| "Lock poisoned".to_string())
    }

    pub fn enter_edit(&self) -> Result<EditorView, String> {
        let mut editor = self.editor.lock().map_err(|_| "Lock poisoned")?;
        let profile = self.profile.lock().map_err(|_| "Lock poisoned")?;
        editor.enter_edit(&profile);
        Ok(EditorView::from(&*editor))
    }

    pub fn update_draft_field(
        &self,
        field: DraftField,
        value: String,
    ) -> Result<EditorView, String> {
        let mut editor = self.editor.lock().map_err(|_| "Lock poisoned")?;
        editor.update_field(field, value).map_err(|e| e.to_string())?;
        Ok(EditorView::from(&*editor))
    }

    pub fn cancel_edit(&self) -> Result<EditorView, String> {
        let mut editor = self.editor.lock().map_err(|_| "Lock poisoned")?;
        editor.cancel();
        Ok(EditorView::from(&*editor))
    }

    /// Commit the draft as the new profile.
    ///
    /// Both locks are held across the swap, so a reader sees either the old
    /// profile or the new one, never one fresh field and one stale.
    pub fn save_edit(&self) -> Result<CompanyProfile, String> {
        let mut editor = self.editor.lock().map_err(|_| "Lock poisoned")?;
        let draft = editor.save().map_err(|e| e.to_string())?;
        let mut profile = self.profile.lock().map_err(|_| "Lock poisoned")?;
        *profile = CompanyProfile {
            who_we_are: draft.who_we_are,
            mission: draft.mission,
            updated_at: Some(Utc::now().to_rfc3339()),
        };
        Ok(profile.clone())
    }

    /// Run one generation request against the live draft.
    ///
    /// The service call happens with no lock held. A failure is returned to
    /// the caller (and logged) with the draft untouched; a completion that
    /// arrives after the session moved on is dropped.
    pub async fn generate_identity(&self) -> Result<EditorView, String> {
        let generator = self.generator()?;
        let context = self.business_context();

        let ticket = {
            let mut editor = self.editor.lock().map_err(|_| "Lock poisoned")?;
            editor.begin_generation().map_err(|e| e.to_string())?
        };
        log::info!("generation {} started", ticket.request_id());

        let result = generator.generate_identity(&context).await;

        let mut editor = self.editor.lock().map_err(|_| "Lock poisoned")?;
        match result {
            Ok(identity) => {
                let outcome = editor.finish_generation(&ticket, Some(identity));
                if outcome == GenerationOutcome::DiscardedStale {
                    log::info!(
                        "generation {} resolved after the editor moved on; discarded",
                        ticket.request_id()
                    );
                } else {
                    log::info!("generation {} applied", ticket.request_id());
                }
                Ok(EditorView::from(&*editor))
            }
            Err(e) => {
                editor.finish_generation(&ticket, None);
                log::warn!("generation {} failed: {}", ticket.request_id(), e);
                Err(e.to_string())
            }
        }
    }

    pub fn config_status(&self) -> Result<ConfigStatus, String> {
        let config = self
            .config
            .lock()
            .map_err(|_| "Lock poisoned")?
            .clone()
            .unwrap_or_default();
        Ok(ConfigStatus {
            ai_enabled: config::resolve_api_key(&config).is_some()
                || self
                    .generator
                    .lock()
                    .map(|g| g.is_some())
                    .unwrap_or(false),
            model: config.model,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
