// src/infrastructure/workspace.rs
use crate::constants::{NOTES_SUBDIR, SETTINGS_FILE_NAME};
use crate::infrastructure::{FileNoteRepository, JsonSettingsRepository};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File locations of one application root, resolved once at startup.
///
/// Notes live in `<root>/notes` when that directory exists at resolution time,
/// otherwise in the parent of `<root>`. The choice is never re-evaluated, even if
/// the directory appears or disappears later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    notes_dir: PathBuf,
    settings_path: PathBuf,
}

impl Workspace {
    pub fn resolve<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = std::path::absolute(root.as_ref()).with_context(|| {
            format!(
                "Failed to resolve application root {}",
                root.as_ref().display()
            )
        })?;

        let preferred = root.join(NOTES_SUBDIR);
        let notes_dir = if preferred.is_dir() {
            preferred
        } else {
            let fallback = root.parent().unwrap_or(&root).to_path_buf();
            debug!(?preferred, ?fallback, "Notes directory missing, using parent of root");
            fallback
        };

        info!(?root, ?notes_dir, "Resolved workspace");
        Ok(Self {
            settings_path: root.join(SETTINGS_FILE_NAME),
            root,
            notes_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// The directory `resolve` prefers; it may not be the one in use.
    pub fn preferred_notes_dir(&self) -> PathBuf {
        self.root.join(NOTES_SUBDIR)
    }

    pub fn note_repository(&self) -> FileNoteRepository {
        FileNoteRepository::new(&self.notes_dir)
    }

    pub fn settings_repository(&self) -> JsonSettingsRepository {
        JsonSettingsRepository::new(&self.settings_path)
    }
}
