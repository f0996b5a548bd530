// src/application/note_editor.rs
use crate::application::NoteRepository;
use crate::constants::NEW_NOTE_TITLE;
use crate::domain::{display_title, slugify, DomainError, EditorForm};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Stored under this slug; an existing note with the same slug was overwritten.
    Created(String),
    /// The title had no usable characters; nothing was written.
    Rejected,
}

pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Blank form for a note whose title is still to be chosen.
    pub fn new_form(&self) -> EditorForm {
        EditorForm {
            title: NEW_NOTE_TITLE.to_string(),
            slug: String::new(),
            content: String::new(),
            is_new: true,
        }
    }

    /// Editor contents for `slug`; a missing note yields an empty, new form.
    pub fn edit_form(&mut self, slug: &str) -> Result<EditorForm, DomainError> {
        let note = self.repository.read_note(slug)?;
        Ok(EditorForm {
            title: format!("Edit: {}", display_title(slug)),
            slug: slug.to_string(),
            is_new: note.is_none(),
            content: note.map(|n| n.content).unwrap_or_default(),
        })
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn create_note(&mut self, title: &str, content: &str) -> Result<CreateOutcome, DomainError> {
        let slug = slugify(title);
        if slug.is_empty() {
            warn!(title, "Title yields an empty slug, refusing to create note");
            return Ok(CreateOutcome::Rejected);
        }

        self.repository.write_note(&slug, content)?;
        info!(slug, "Created note");
        Ok(CreateOutcome::Created(slug))
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn save_note(&mut self, slug: &str, content: &str) -> Result<(), DomainError> {
        self.repository.write_note(slug, content)?;
        info!(slug, bytes = content.len(), "Saved note");
        Ok(())
    }
}
