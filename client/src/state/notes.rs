//! Release-notes workspace for the deployment page.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::{Commit, DeploymentNote, DeploymentRecord};

/// Most notes shown in the history list.
pub const NOTES_HISTORY_LIMIT: usize = 20;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotesState {
    pub draft: String,
    pub history: Vec<DeploymentNote>,
    pub commits: Vec<Commit>,
    pub last: Option<DeploymentRecord>,
    pub saving: bool,
    pub load_error: Option<String>,
}

impl NotesState {
    /// Trimmed draft, or the prompt to show when it is empty.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the draft is blank.
    pub fn validated_draft(&self) -> Result<String, &'static str> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return Err("Enter deployment notes first.");
        }
        Ok(trimmed.to_owned())
    }

    /// Record a note the backend accepted and clear the draft.
    pub fn record_saved(&mut self, note: DeploymentNote) {
        self.history.insert(0, note);
        self.history.truncate(NOTES_HISTORY_LIMIT);
        self.draft.clear();
        self.saving = false;
    }

    pub fn set_history(&mut self, mut notes: Vec<DeploymentNote>) {
        notes.truncate(NOTES_HISTORY_LIMIT);
        self.history = notes;
    }

    /// Remember the first load failure; later ones add nothing new.
    pub fn note_load_error(&mut self, what: &str, reason: &str) {
        if self.load_error.is_none() {
            self.load_error = Some(format!("Could not load {what}: {reason}"));
        }
    }
}
