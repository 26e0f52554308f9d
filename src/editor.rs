//! Editing session: the live page configuration and its undo history.
//!
//! [`Editor`] is the single owner of the live [`Snapshot`]. Every undoable
//! change goes through one of its methods, which checkpoint the
//! pre-change snapshot only when the change actually alters something.

use crate::assistant::AutoConfigSuggestion;
use crate::document::{ImportError, ProjectDocument};
use crate::history::History;
use crate::models::{Layout, SectionId, SectionKind, Snapshot, ThemeUpdate};
use tracing::debug;

/// Live page configuration plus bounded undo/redo.
#[derive(Debug, Clone)]
pub struct Editor {
    history: History<Snapshot>,
}

impl Editor {
    /// Starts a session from the starter snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::starter())
    }

    /// Starts a session from an existing snapshot with empty history.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            history: History::new(snapshot),
        }
    }

    /// Starts a session that keeps at most `limit` undo steps.
    #[must_use]
    pub fn with_history_limit(snapshot: Snapshot, limit: usize) -> Self {
        Self {
            history: History::with_limit(snapshot, limit),
        }
    }

    /// The live snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    /// Undo/redo stacks, for inspection.
    #[must_use]
    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    /// Records the live snapshot in history and discards the redo branch.
    pub fn record_checkpoint(&mut self) {
        self.history.record_checkpoint();
        debug!(
            past = self.history.past_len(),
            "Recorded checkpoint"
        );
    }

    /// Steps back one edit. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        debug!(
            changed,
            past = self.history.past_len(),
            future = self.history.future_len(),
            "Undo"
        );
        changed
    }

    /// Re-applies the nearest undone edit. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        debug!(
            changed,
            past = self.history.past_len(),
            future = self.history.future_len(),
            "Redo"
        );
        changed
    }

    /// Replaces the live snapshot without recording history.
    pub fn replace_all(&mut self, snapshot: Snapshot) {
        self.history.replace_live(snapshot);
    }

    /// Replaces the live snapshot and forgets all history.
    ///
    /// Used when switching to a different project.
    pub fn reset(&mut self, snapshot: Snapshot) {
        self.history.replace_live(snapshot);
        self.history.clear();
    }

    /// Merges theme fields as one undoable edit.
    ///
    /// Returns false, and records nothing, if the merge changes no value.
    pub fn update_theme(&mut self, update: ThemeUpdate) -> bool {
        let merged = self.snapshot().theme.merged(update);
        if merged == self.snapshot().theme {
            debug!("Theme update changed nothing, skipping checkpoint");
            return false;
        }

        self.record_checkpoint();
        self.history.live_mut().theme = merged;
        true
    }

    /// Appends a section as one undoable edit and returns its id.
    pub fn add_section(&mut self, kind: SectionKind) -> SectionId {
        self.record_checkpoint();
        let id = self.history.live_mut().layout.add_section(kind);
        debug!(%kind, %id, "Added section");
        id
    }

    /// Removes a section as one undoable edit.
    ///
    /// Unknown ids are a no-op and record nothing. Returns whether a section
    /// was removed.
    pub fn remove_section(&mut self, id: &SectionId) -> bool {
        if !self.snapshot().layout.contains(id) {
            debug!(%id, "Section not found, nothing to remove");
            return false;
        }

        self.record_checkpoint();
        self.history.live_mut().layout.remove_section(id);
        debug!(%id, "Removed section");
        true
    }

    /// Replaces the live snapshot with an imported document.
    ///
    /// The document is fully validated before anything changes; a rejected
    /// document leaves the session untouched. Returns Ok(false) when the
    /// document matches the live snapshot.
    pub fn import_document(&mut self, text: &str) -> Result<bool, ImportError> {
        let document = ProjectDocument::from_json(text)?;
        Ok(self.apply_snapshot(document.into_snapshot()))
    }

    /// Replaces the live snapshot as one undoable edit.
    ///
    /// Returns false, and records nothing, if `snapshot` is identical to the
    /// live one, section content included.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) -> bool {
        if snapshot.is_identical(self.snapshot()) {
            return false;
        }

        self.record_checkpoint();
        self.history.replace_live(snapshot);
        true
    }

    /// Exports the live snapshot as a document.
    #[must_use]
    pub fn export_document(&self) -> ProjectDocument {
        ProjectDocument::from_snapshot(self.snapshot())
    }

    /// Applies an assistant's auto-configuration suggestion.
    ///
    /// Theme fields are applied only if the suggestion carries a primary
    /// color; the layout is replaced only if it names at least one section.
    /// The whole application is a single undoable edit. An empty suggestion
    /// records nothing and returns false.
    pub fn apply_suggestion(&mut self, suggestion: &AutoConfigSuggestion) -> bool {
        let mut next = self.snapshot().clone();

        if suggestion.primary_color.is_some() {
            next.theme.set_theme_fields(suggestion.theme_update());
        }

        if !suggestion.sections.is_empty() {
            next.layout = Layout::from_kinds(suggestion.sections.iter().copied());
        }

        let applied = self.apply_snapshot(next);
        debug!(applied, "Applied assistant suggestion");
        applied
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
