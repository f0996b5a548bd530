// src/application/note_viewer.rs
use crate::application::{NoteRenderer, NoteRepository};
use crate::domain::{DomainError, NotePage};
use tracing::{debug, instrument};

/// What viewing a slug leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    Rendered(NotePage),
    /// The note does not exist; the caller should show its edit form instead.
    RedirectToEdit(String),
}

pub struct NoteViewer<R: NoteRepository, M: NoteRenderer> {
    repository: R,
    renderer: M,
}

impl<R: NoteRepository, M: NoteRenderer> NoteViewer<R, M> {
    pub fn new(repository: R, renderer: M) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn view_note(&mut self, slug: &str) -> Result<ViewOutcome, DomainError> {
        let Some(note) = self.repository.read_note(slug)? else {
            debug!(slug, "Note missing, redirecting to editor");
            return Ok(ViewOutcome::RedirectToEdit(slug.to_string()));
        };

        let html = self.renderer.render(&note.content);
        Ok(ViewOutcome::Rendered(NotePage {
            title: note.name(),
            slug: note.slug,
            html,
        }))
    }
}
