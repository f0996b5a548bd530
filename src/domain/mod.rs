// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod settings;
pub mod slug;

pub use error::DomainError;
pub use note::{EditorForm, Note, NotePage, NoteSummary};
pub use settings::{Settings, SettingsRecord};
pub use slug::{display_title, ensure_addressable, slugify};
