// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteKind, NoteType};

pub type AddCall = (String, String, Option<String>);

/// Shared mock repository for testing code that depends on NoteRepository
///
/// Records every `add` call so tests can check what the caller asked for,
/// and can be told to reject a given note kind.
///
/// # Examples
///
/// ```
/// use smartnotes::application::NoteRepository;
/// use smartnotes::domain::{Note, NoteKind};
/// use smartnotes::util::testing::MockNoteRepository;
///
/// let mut mock = MockNoteRepository::builder()
///     .with_note(Note::new(1, "Buy milk", NoteKind::Text))
///     .with_rejected_kind("reminder")
///     .build();
///
/// assert!(mock.add("reminder", "Call mom", Some("2024-06-01 09:00:00")).is_err());
/// assert_eq!(mock.list().len(), 1);
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    rejected_kinds: Vec<String>,
    added: Vec<AddCall>,
    next_id: u64,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Arguments of every `add` call, in call order
    pub fn added_calls(&self) -> &[AddCall] {
        &self.added
    }
}

impl NoteRepository for MockNoteRepository {
    fn add(
        &mut self,
        kind: &str,
        content: &str,
        reminder_time: Option<&str>,
    ) -> Result<u64, DomainError> {
        self.added.push((
            kind.to_string(),
            content.to_string(),
            reminder_time.map(str::to_string),
        ));

        if self.rejected_kinds.iter().any(|k| k == kind) {
            return Err(DomainError::InvalidKind(kind.to_string()));
        }

        // Reminder times are not parsed here; the mock stores text notes only
        kind.parse::<NoteType>()?;
        let id = self.next_id;
        self.notes.push(Note::new(id, content, NoteKind::Text));
        self.next_id += 1;
        Ok(id)
    }

    fn delete(&mut self, id: u64) -> Result<(), DomainError> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or(DomainError::NotFound(id))?;
        self.notes.remove(index);
        Ok(())
    }

    fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn search(&self, keyword: &str) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.matches(keyword))
            .cloned()
            .collect()
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    rejected_kinds: Vec<String>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            rejected_kinds: vec![],
        }
    }

    /// Add a note that is returned by list and search
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure add to fail with InvalidKind for `kind`
    pub fn with_rejected_kind(mut self, kind: &str) -> Self {
        self.rejected_kinds.push(kind.to_string());
        self
    }

    pub fn build(self) -> MockNoteRepository {
        let next_id = self.notes.iter().map(Note::id).max().unwrap_or(0) + 1;
        MockNoteRepository {
            notes: self.notes,
            rejected_kinds: self.rejected_kinds,
            added: vec![],
            next_id,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

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
