// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteSummary};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all notes ordered by filename
    pub fn list_notes(&mut self) -> Result<Vec<NoteSummary>, DomainError> {
        self.repository.list_notes()
    }
}
