//! Wire types shared between the backend and the webview.
//!
//! Everything here crosses the command bridge as camelCase JSON. Parsing is
//! forward-compatible: optional fields default instead of failing.

use serde::{Deserialize, Serialize};

use crate::editor::{EditorMode, EditorSession, GenerationState};

/// The committed identity text pair rendered in the "Nuestra Identidad"
/// section. Replaced wholesale on save; never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub who_we_are: String,
    pub mission: String,
    /// RFC 3339 stamp of the last save. Absent for the built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CompanyProfile {
    /// The copy the page ships with before anyone edits it.
    pub fn default_profile() -> Self {
        Self {
            who_we_are: "The White Order es una compañía líder en logística y corretaje de \
                         importaciones de alta gama. Nos especializamos en conectar el mercado \
                         estadounidense con usuarios en toda la región, garantizando \
                         transparencia y rapidez."
                .to_string(),
            mission: "Nuestra misión es democratizar el acceso a la mejor tecnología del mundo. \
                      Trabajamos incansablemente para que importar un iPhone o cualquier \
                      producto premium sea un proceso libre de estrés, con costos reducidos."
                .to_string(),
            updated_at: None,
        }
    }
}

/// Snapshot of the draft fields while editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub who_we_are: String,
    pub mission: String,
}

/// Snapshot of the editor session handed to the frontend after every
/// editor command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub mode: EditorMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<DraftView>,
    pub generation: GenerationState,
}

impl From<&EditorSession> for EditorView {
    fn from(session: &EditorSession) -> Self {
        EditorView {
            mode: session.mode(),
            draft: session.draft().map(|d| DraftView {
                who_we_are: d.who_we_are.clone(),
                mission: d.mission.clone(),
            }),
            generation: session.generation(),
        }
    }
}

/// Whether the AI button should be enabled, and which model it would hit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    pub ai_enabled: bool,
    pub model: String,
}
