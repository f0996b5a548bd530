// src/util/testing.rs

use anyhow::Result;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::env;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRenderer, NoteRepository, SettingsRepository};
use crate::constants::NOTE_EXTENSION;
use crate::domain::{DomainError, Note, NoteSummary, Settings};

/// In-memory note store for testing use cases that depend on NoteRepository
///
/// Notes are kept ordered by slug, which matches filename order for the
/// filesystem store.
///
/// # Examples
///
/// ```
/// use notewall::util::testing::MockNoteRepository;
/// use notewall::domain::Note;
///
/// let mock = MockNoteRepository::builder()
///     .with_note(Note::new("groceries", "- milk"))
///     .with_read_failure("locked")
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: BTreeMap<String, Note>,
    read_failures: HashSet<String>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    fn filename(slug: &str) -> String {
        format!("{slug}.{NOTE_EXTENSION}")
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&mut self) -> Result<Vec<NoteSummary>, DomainError> {
        Ok(self
            .notes
            .keys()
            .map(|slug| NoteSummary::from_filename(slug.as_str(), Self::filename(slug)))
            .collect())
    }

    fn read_note(&mut self, slug: &str) -> Result<Option<Note>, DomainError> {
        if self.read_failures.contains(slug) {
            return Err(DomainError::io(
                Self::filename(slug),
                io::Error::new(io::ErrorKind::PermissionDenied, "mock read failure"),
            ));
        }
        Ok(self.notes.get(slug).cloned())
    }

    fn write_note(&mut self, slug: &str, content: &str) -> Result<(), DomainError> {
        self.notes
            .insert(slug.to_string(), Note::new(slug, content));
        Ok(())
    }

    fn delete_note(&mut self, slug: &str) -> Result<bool, DomainError> {
        Ok(self.notes.remove(slug).is_some())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: BTreeMap<String, Note>,
    read_failures: HashSet<String>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            read_failures: HashSet::new(),
        }
    }

    /// Add a note that can be read, listed and deleted
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.insert(note.slug.clone(), note);
        self
    }

    /// Make read_note fail with an I/O error for a specific slug
    pub fn with_read_failure(mut self, slug: &str) -> Self {
        self.read_failures.insert(slug.to_string());
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            read_failures: self.read_failures,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renderer that wraps the markdown in a marker tag instead of converting it
#[derive(Debug, Default, Clone, Copy)]
pub struct StubRenderer;

impl NoteRenderer for StubRenderer {
    fn render(&mut self, markdown: &str) -> String {
        format!("<rendered>{markdown}</rendered>")
    }
}

/// Settings store holding the raw persisted object in memory
#[derive(Debug, Default)]
pub struct InMemorySettings {
    saved: RefCell<Option<Map<String, Value>>>,
}

impl InMemorySettings {
    /// Start with a raw persisted value; anything but an object reads as defaults
    pub fn with_raw(value: Value) -> Self {
        let saved = match value {
            Value::Object(map) => Some(map),
            _ => None,
        };
        Self {
            saved: RefCell::new(saved),
        }
    }
}

impl SettingsRepository for InMemorySettings {
    fn load(&self) -> Settings {
        match self.saved.borrow().as_ref() {
            Some(saved) => Settings::merged(saved.clone()),
            None => Settings::defaults(),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), DomainError> {
        *self.saved.borrow_mut() = Some(settings.as_map().clone());
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // syntect's lazy loaders are chatty at trace level
    let noisy_modules = ["syntect", "onig", "fancy_regex"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
