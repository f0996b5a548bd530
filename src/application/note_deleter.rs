// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;
use tracing::info;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note; returns false when there was nothing to delete
    pub fn delete_note(&mut self, slug: &str) -> Result<bool, DomainError> {
        let removed = self.repository.delete_note(slug)?;
        info!(slug, removed, "Delete requested");
        Ok(removed)
    }
}
