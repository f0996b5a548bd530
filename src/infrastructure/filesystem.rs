// src/infrastructure/filesystem.rs
use crate::application::NoteRepository;
use crate::constants::NOTE_EXTENSION;
use crate::domain::{DomainError, Note, NoteSummary};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Notes stored as `<notes_dir>/<slug>.md`, one UTF-8 file per note.
///
/// No caching and no locking: every call goes straight to the filesystem, and
/// concurrent writers to the same note race with the last one winning.
#[derive(Debug, Clone)]
pub struct FileNoteRepository {
    notes_dir: PathBuf,
}

impl FileNoteRepository {
    pub fn new<P: AsRef<Path>>(notes_dir: P) -> Self {
        let notes_dir = notes_dir.as_ref().to_path_buf();
        debug!(?notes_dir, "Creating new FileNoteRepository");
        Self { notes_dir }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    fn note_path(&self, slug: &str) -> PathBuf {
        self.notes_dir.join(format!("{slug}.{NOTE_EXTENSION}"))
    }

    fn is_note_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == NOTE_EXTENSION) && path.is_file()
    }
}

impl NoteRepository for FileNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<NoteSummary>, DomainError> {
        let entries =
            fs::read_dir(&self.notes_dir).map_err(|e| DomainError::io(&self.notes_dir, e))?;

        let mut notes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DomainError::io(&self.notes_dir, e))?;
            let path = entry.path();
            let Some(filename) = entry.file_name().to_str().map(str::to_owned) else {
                warn!(?path, "Skipping file with non UTF-8 name");
                continue;
            };
            if !Self::is_note_file(&path) {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            notes.push(NoteSummary::from_filename(slug, filename.as_str()));
        }

        notes.sort_by(|a, b| a.filename.cmp(&b.filename));
        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn read_note(&mut self, slug: &str) -> Result<Option<Note>, DomainError> {
        let path = self.note_path(slug);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(Note::new(slug, content))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "Note file does not exist");
                Ok(None)
            }
            Err(e) => Err(DomainError::io(path, e)),
        }
    }

    #[instrument(level = "debug", skip(self, content))]
    fn write_note(&mut self, slug: &str, content: &str) -> Result<(), DomainError> {
        let path = self.note_path(slug);
        fs::write(&path, content).map_err(|e| DomainError::io(path, e))
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, slug: &str) -> Result<bool, DomainError> {
        let path = self.note_path(slug);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repository() -> (TempDir, FileNoteRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileNoteRepository::new(temp_dir.path());
        (temp_dir, repo)
    }

    #[test]
    fn given_written_note_when_reading_then_returns_same_content() {
        let (_dir, mut repo) = repository();
        let content = "# Title\n\n| a | b |\n|---|---|\n| *x* | `y` |\n\nÜmlaut ✓";

        repo.write_note("round-trip", content).unwrap();

        let note = repo.read_note("round-trip").unwrap().expect("Note should exist");
        assert_eq!(note.content, content);
    }

    #[test]
    fn given_empty_content_when_writing_then_note_exists_and_is_empty() {
        let (_dir, mut repo) = repository();

        repo.write_note("blank", "").unwrap();

        assert_eq!(repo.read_note("blank").unwrap(), Some(Note::new("blank", "")));
    }

    #[test]
    fn given_no_file_when_reading_then_returns_none() {
        let (_dir, mut repo) = repository();

        assert_eq!(repo.read_note("absent").unwrap(), None);
    }

    #[test]
    fn given_existing_note_when_writing_again_then_overwrites_fully() {
        let (dir, mut repo) = repository();
        repo.write_note("draft", "a much longer first version").unwrap();

        repo.write_note("draft", "short").unwrap();

        let on_disk = fs::read_to_string(dir.path().join("draft.md")).unwrap();
        assert_eq!(on_disk, "short");
    }

    #[test]
    fn given_note_when_deleting_twice_then_second_delete_is_noop() {
        let (_dir, mut repo) = repository();
        repo.write_note("gone", "bye").unwrap();

        assert!(repo.delete_note("gone").unwrap());
        assert!(!repo.delete_note("gone").unwrap());
        assert_eq!(repo.read_note("gone").unwrap(), None);
    }

    #[test]
    fn given_mixed_directory_when_listing_then_only_markdown_files_sorted() {
        let (dir, mut repo) = repository();
        repo.write_note("b-note", "b").unwrap();
        repo.write_note("a_note", "a").unwrap();
        fs::write(dir.path().join("readme.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        let notes = repo.list_notes().unwrap();

        assert_eq!(
            notes,
            vec![
                NoteSummary::from_filename("a_note", "a_note.md"),
                NoteSummary::from_filename("b-note", "b-note.md"),
            ]
        );
        assert_eq!(notes[1].name, "B Note");
    }

    #[test]
    fn given_dot_prefixed_note_when_listing_then_it_is_listed_like_any_note() {
        let (_dir, mut repo) = repository();
        repo.write_note(".plan", "x").unwrap();

        let notes = repo.list_notes().unwrap();

        assert!(repo.read_note(".plan").unwrap().is_some());
        assert_eq!(notes, vec![NoteSummary::from_filename(".plan", ".plan.md")]);
    }

    #[test]
    fn given_dotted_filename_when_listing_then_slug_keeps_inner_dots() {
        let (dir, mut repo) = repository();
        fs::write(dir.path().join("v1.2-release.md"), "notes").unwrap();

        let notes = repo.list_notes().unwrap();

        assert_eq!(notes[0].slug, "v1.2-release");
    }

    #[test]
    fn given_missing_directory_when_writing_then_io_error_propagates() {
        let dir = TempDir::new().unwrap();
        let mut repo = FileNoteRepository::new(dir.path().join("nope"));

        let result = repo.write_note("x", "y");

        assert!(matches!(result, Err(DomainError::Io { .. })));
    }
}
