// src/application/repository.rs
use crate::domain::{DomainError, Note, NoteSummary, Settings};

/// Key-value store of notes: key = slug, value = markdown text.
pub trait NoteRepository {
    /// Fresh snapshot of all notes, ordered by filename.
    fn list_notes(&mut self) -> Result<Vec<NoteSummary>, DomainError>;

    /// `None` when no note exists under `slug`; absence is not an error.
    fn read_note(&mut self, slug: &str) -> Result<Option<Note>, DomainError>;

    /// Create or fully overwrite the note.
    fn write_note(&mut self, slug: &str, content: &str) -> Result<(), DomainError>;

    /// Remove the note. Returns whether something was removed; a missing note is a no-op.
    fn delete_note(&mut self, slug: &str) -> Result<bool, DomainError>;
}

/// Converts stored markdown into HTML.
///
/// Implementations must not carry state from one call into the next.
pub trait NoteRenderer {
    fn render(&mut self, markdown: &str) -> String;
}

pub trait SettingsRepository {
    /// Never fails: anything unreadable yields the defaults.
    fn load(&self) -> Settings;

    /// Overwrite the stored settings with `settings` in full.
    fn save(&self, settings: &Settings) -> Result<(), DomainError>;
}
