// src/domain/note.rs
use crate::domain::slug::display_title;
use serde::Serialize;

/// A stored markdown document. Existence of the backing file is existence of the note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub slug: String,
    pub content: String,
}

impl Note {
    pub fn new(slug: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            content: content.into(),
        }
    }

    /// Display title derived from the slug; never stored.
    pub fn name(&self) -> String {
        display_title(&self.slug)
    }
}

/// One entry of a note listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSummary {
    pub slug: String,
    pub name: String,
    pub filename: String,
}

impl NoteSummary {
    pub fn from_filename(slug: impl Into<String>, filename: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            name: display_title(&slug),
            slug,
            filename: filename.into(),
        }
    }
}

/// A note rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePage {
    pub slug: String,
    pub title: String,
    pub html: String,
}

/// Data backing the note editor, for both new and existing notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorForm {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub is_new: bool,
}
