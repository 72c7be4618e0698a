// src/infrastructure/memory.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteKind, NoteType};
use tracing::{debug, instrument};

/// Process-lifetime note store.
///
/// IDs start at 1 and are never reused, even after deletion.
#[derive(Debug)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
    next_id: u64,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        debug!("Creating new InMemoryNoteRepository");
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// ID the next successful `add` will assign
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn add(
        &mut self,
        kind: &str,
        content: &str,
        reminder_time: Option<&str>,
    ) -> Result<u64, DomainError> {
        // Build the note before touching the counter so failures leave no trace
        let note_kind = match kind.parse::<NoteType>()? {
            NoteType::Text => NoteKind::Text,
            NoteType::Reminder => NoteKind::reminder(reminder_time.unwrap_or_default())?,
        };

        let id = self.next_id;
        self.notes.push(Note::new(id, content, note_kind));
        self.next_id += 1;

        debug!(id, next_id = self.next_id, "Stored note");
        Ok(id)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete(&mut self, id: u64) -> Result<(), DomainError> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id() == id)
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
            .filter(|note| note.matches(keyword))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_repository_when_created_then_next_id_is_one() {
        let repo = InMemoryNoteRepository::new();

        assert_eq!(repo.next_id(), 1);
        assert!(repo.is_empty());
        assert!(repo.list().is_empty());
    }

    #[test]
    fn given_text_kind_with_reminder_time_when_adding_then_ignores_time() {
        // Arrange
        let mut repo = InMemoryNoteRepository::new();

        // Act
        let id = repo
            .add("text", "Buy milk", Some("garbage"))
            .expect("Text notes ignore the reminder time");

        // Assert
        let notes = repo.list();
        assert_eq!(id, 1);
        assert_eq!(notes[0].kind(), &NoteKind::Text);
    }

    #[test]
    fn given_reminder_without_time_when_adding_then_returns_parse_error() {
        let mut repo = InMemoryNoteRepository::new();

        let result = repo.add("reminder", "Call mom", None);

        assert!(matches!(result, Err(DomainError::ParseError { .. })));
        assert_eq!(repo.next_id(), 1);
        assert!(repo.is_empty());
    }

    #[test]
    fn given_bogus_kind_when_adding_then_state_is_unchanged() {
        let mut repo = InMemoryNoteRepository::new();
        repo.add("text", "keep", None).unwrap();

        let result = repo.add("bogus", "x", None);

        assert!(matches!(result, Err(DomainError::InvalidKind(k)) if k == "bogus"));
        assert_eq!(repo.next_id(), 2);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn given_three_notes_when_deleting_middle_then_keeps_order_of_rest() {
        let mut repo = InMemoryNoteRepository::new();
        for content in ["one", "two", "three"] {
            repo.add("text", content, None).unwrap();
        }

        repo.delete(2).expect("Delete should succeed");

        let ids: Vec<u64> = repo.list().iter().map(Note::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn given_deleted_id_when_deleting_again_then_returns_not_found_and_keeps_counter() {
        let mut repo = InMemoryNoteRepository::new();
        repo.add("text", "a", None).unwrap();
        repo.add("text", "b", None).unwrap();
        repo.delete(1).unwrap();

        let result = repo.delete(1);

        assert!(matches!(result, Err(DomainError::NotFound(1))));
        assert_eq!(repo.next_id(), 3);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn given_deletions_when_adding_then_ids_are_never_reused() {
        let mut repo = InMemoryNoteRepository::new();
        let first = repo.add("text", "a", None).unwrap();
        repo.delete(first).unwrap();

        let second = repo.add("text", "b", None).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }
}
