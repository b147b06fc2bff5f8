//! The identity-section editor state machine.
//!
//! All mutation of the editable section goes through [`EditorSession`] —
//! entering edit mode seeds a draft from the committed profile, field edits
//! touch only the draft, and the draft either commits wholesale on save or
//! vanishes on cancel. Generation runs as an orthogonal Idle/InFlight
//! sub-state: at most one request per session, and a completion that lands
//! after the session moved on (cancel, save, re-enter) is discarded instead
//! of resurrecting a dead draft.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EditorError;
use crate::intelligence::GeneratedIdentity;
use crate::types::CompanyProfile;

/// Which of the two editable fields an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    WhoWeAre,
    Mission,
}

/// Whether the section is being displayed or edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorMode {
    Viewing,
    Editing,
}

/// Generation request sub-state, orthogonal to [`EditorMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationState {
    Idle,
    InFlight,
}

/// The uncommitted edit buffer. Exists only while the session is Editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDraft {
    pub who_we_are: String,
    pub mission: String,
}

impl EditorDraft {
    fn from_profile(profile: &CompanyProfile) -> Self {
        Self {
            who_we_are: profile.who_we_are.clone(),
            mission: profile.mission.clone(),
        }
    }

    /// Per-key application of a generated payload: a present key overwrites
    /// that field, an absent key leaves it alone.
    fn apply_generated(&mut self, identity: GeneratedIdentity) {
        if let Some(who) = identity.who {
            self.who_we_are = who;
        }
        if let Some(mission) = identity.mission {
            self.mission = mission;
        }
    }
}

/// Handle for an issued generation request.
///
/// Carries the session epoch at issue time; a completion whose ticket epoch
/// no longer matches the session is stale and gets dropped.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    epoch: u64,
    request_id: Uuid,
}

impl GenerationTicket {
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

/// What happened when a generation request resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Payload applied to the live draft (possibly only one field of it).
    Applied,
    /// The session moved on while the request was airborne; payload dropped.
    DiscardedStale,
    /// The request failed; draft untouched.
    Failed,
}

/// The single editor instance owning mode, draft, and generation state.
#[derive(Debug)]
pub struct EditorSession {
    mode: EditorMode,
    draft: Option<EditorDraft>,
    generation: GenerationState,
    /// Bumped on every enter/save/cancel so airborne completions can tell
    /// the draft they were issued against is gone.
    epoch: u64,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Viewing,
            draft: None,
            generation: GenerationState::Idle,
            epoch: 0,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> Option<&EditorDraft> {
        self.draft.as_ref()
    }

    pub fn generation(&self) -> GenerationState {
        self.generation
    }

    /// Enter edit mode, seeding the draft from the committed profile.
    ///
    /// Total: entering while already Editing re-seeds the draft, discarding
    /// any unsaved changes, same as a fresh entry.
    pub fn enter_edit(&mut self, current: &CompanyProfile) {
        self.draft = Some(EditorDraft::from_profile(current));
        self.mode = EditorMode::Editing;
        self.epoch += 1;
    }

    /// Replace one draft field. Never touches the committed profile.
    pub fn update_field(&mut self, field: DraftField, value: String) -> Result<(), EditorError> {
        let draft = self.draft.as_mut().ok_or(EditorError::NotEditing)?;
        match field {
            DraftField::WhoWeAre => draft.who_we_are = value,
            DraftField::Mission => draft.mission = value,
        }
        Ok(())
    }

    /// Discard the draft and return to Viewing. The committed profile is
    /// unchanged. An airborne generation request keeps its InFlight mark;
    /// its completion is neutralized by the epoch bump.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.mode = EditorMode::Viewing;
        self.epoch += 1;
    }

    /// Take the draft out for commit and return to Viewing.
    ///
    /// The caller commits the returned draft as the new profile while still
    /// holding both state locks, so both fields change together.
    pub fn save(&mut self) -> Result<EditorDraft, EditorError> {
        let draft = self.draft.take().ok_or(EditorError::NotEditing)?;
        self.mode = EditorMode::Viewing;
        self.epoch += 1;
        Ok(draft)
    }

    /// Mark a generation request as issued.
    ///
    /// Rejects when not editing, and rejects (does not queue) a second
    /// request while one is in flight.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, EditorError> {
        if self.mode != EditorMode::Editing {
            return Err(EditorError::NotEditing);
        }
        if self.generation == GenerationState::InFlight {
            return Err(EditorError::GenerationInFlight);
        }
        self.generation = GenerationState::InFlight;
        Ok(GenerationTicket {
            epoch: self.epoch,
            request_id: Uuid::new_v4(),
        })
    }

    /// Resolve a generation request. Always returns the generation state to
    /// Idle; the payload is applied only when the ticket is still current
    /// and a draft is live.
    pub fn finish_generation(
        &mut self,
        ticket: &GenerationTicket,
        payload: Option<GeneratedIdentity>,
    ) -> GenerationOutcome {
        self.generation = GenerationState::Idle;

        let Some(identity) = payload else {
            return GenerationOutcome::Failed;
        };
        if ticket.epoch != self.epoch {
            return GenerationOutcome::DiscardedStale;
        }
        match self.draft.as_mut() {
            Some(draft) => {
                draft.apply_generated(identity);
                GenerationOutcome::Applied
            }
            None => GenerationOutcome::DiscardedStale,
        }
    }
}
