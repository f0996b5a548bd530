// src/infrastructure/mod.rs
pub mod browser;
pub mod filesystem;
pub mod highlight;
pub mod markdown;
pub mod settings_file;
pub mod workspace;

pub use browser::BrowserLauncher;
pub use filesystem::FileNoteRepository;
pub use markdown::MarkdownRenderer;
pub use settings_file::JsonSettingsRepository;
pub use workspace::Workspace;
