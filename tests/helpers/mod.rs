use anyhow::{Context, Result};
use notewall::infrastructure::{FileNoteRepository, JsonSettingsRepository, Workspace};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: an application root with a `notes/` directory in a temp dir
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub notes_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().join("notewall");
        let notes_dir = root.join("notes");
        std::fs::create_dir_all(&notes_dir).context("Failed to create notes directory")?;

        Ok(Self {
            _temp_dir: temp_dir,
            root,
            notes_dir,
        })
    }

    /// Root without a `notes/` directory, so notes fall back to its parent
    pub fn without_notes_dir() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().join("notewall");
        std::fs::create_dir_all(&root).context("Failed to create application root")?;
        let notes_dir = temp_dir.path().to_path_buf();

        Ok(Self {
            _temp_dir: temp_dir,
            root,
            notes_dir,
        })
    }

    pub fn workspace(&self) -> Result<Workspace> {
        Workspace::resolve(&self.root)
    }

    pub fn note_repository(&self) -> Result<FileNoteRepository> {
        Ok(self.workspace()?.note_repository())
    }

    pub fn settings_repository(&self) -> Result<JsonSettingsRepository> {
        Ok(self.workspace()?.settings_repository())
    }

    /// Write a note file directly, bypassing the repository
    pub fn seed_note(&self, slug: &str, content: &str) -> Result<()> {
        std::fs::write(self.notes_dir.join(format!("{slug}.md")), content)
            .context("Failed to seed note")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("settings.json")
    }
}
