// src/application/note_repository.rs
use crate::domain::{DomainError, Note};

pub trait NoteRepository {
    /// Create a note of `kind` ("text" or "reminder") and return its new ID.
    ///
    /// `reminder_time` is ignored for text notes. For reminders a missing
    /// time fails the same way as a malformed one.
    fn add(
        &mut self,
        kind: &str,
        content: &str,
        reminder_time: Option<&str>,
    ) -> Result<u64, DomainError>;

    /// Remove the note with `id`, keeping the order of the others.
    fn delete(&mut self, id: u64) -> Result<(), DomainError>;

    /// All notes in insertion order.
    fn list(&self) -> Vec<Note>;

    /// Notes whose content contains `keyword`, ignoring case.
    fn search(&self, keyword: &str) -> Vec<Note>;
}
