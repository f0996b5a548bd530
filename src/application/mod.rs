// src/application/mod.rs
pub mod note_deleter;
pub mod note_editor;
pub mod note_lister;
pub mod note_viewer;
pub mod repository;
pub mod settings_manager;

pub use note_deleter::NoteDeleter;
pub use note_editor::{CreateOutcome, NoteEditor};
pub use note_lister::NoteLister;
pub use note_viewer::{NoteViewer, ViewOutcome};
pub use repository::{NoteRenderer, NoteRepository, SettingsRepository};
pub use settings_manager::SettingsManager;
