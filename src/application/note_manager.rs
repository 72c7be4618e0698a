// src/application/note_manager.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteType};
use tracing::{debug, info, instrument};

/// Entry point for the five note operations offered to the shell.
pub struct NoteManager<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteManager<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add_text(&mut self, content: &str) -> Result<u64, DomainError> {
        let id = self
            .repository
            .add(NoteType::Text.as_str(), content, None)?;
        info!(id, "Added text note");
        Ok(id)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add_reminder(&mut self, content: &str, reminder_time: &str) -> Result<u64, DomainError> {
        let id = self
            .repository
            .add(NoteType::Reminder.as_str(), content, Some(reminder_time))?;
        info!(id, "Added reminder note");
        Ok(id)
    }

    pub fn list_notes(&self) -> Vec<Note> {
        let notes = self.repository.list();
        debug!(count = notes.len(), "Listed notes");
        notes
    }

    /// Case-insensitive keyword search; an empty keyword matches every note.
    pub fn search_notes(&self, keyword: &str) -> Vec<Note> {
        let notes = self.repository.search(keyword);
        debug!(keyword, count = notes.len(), "Searched notes");
        notes
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete_note(&mut self, id: u64) -> Result<(), DomainError> {
        self.repository.delete(id)?;
        info!(id, "Deleted note");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteKind;
    use crate::util::testing::MockNoteRepository;

    #[test]
    fn given_text_content_when_adding_text_then_passes_text_kind_without_time() {
        // Arrange
        let mut manager = NoteManager::new(MockNoteRepository::builder().build());

        // Act
        let id = manager.add_text("Buy milk").expect("Add should succeed");

        // Assert
        assert_eq!(id, 1);
        assert_eq!(
            manager.repository().added_calls(),
            &[("text".to_string(), "Buy milk".to_string(), None)]
        );
    }

    #[test]
    fn given_reminder_when_adding_reminder_then_passes_reminder_kind_and_time() {
        let mut manager = NoteManager::new(MockNoteRepository::builder().build());

        manager
            .add_reminder("Call mom", "2024-06-01 09:00:00")
            .expect("Add should succeed");

        assert_eq!(
            manager.repository().added_calls(),
            &[(
                "reminder".to_string(),
                "Call mom".to_string(),
                Some("2024-06-01 09:00:00".to_string())
            )]
        );
    }

    #[test]
    fn given_rejecting_repository_when_adding_then_propagates_error() {
        let mut manager = NoteManager::new(
            MockNoteRepository::builder()
                .with_rejected_kind("reminder")
                .build(),
        );

        let result = manager.add_reminder("Call mom", "2024-06-01 09:00:00");

        assert!(matches!(result, Err(DomainError::InvalidKind(_))));
    }

    #[test]
    fn given_missing_note_when_deleting_then_returns_not_found() {
        let mut manager = NoteManager::new(MockNoteRepository::builder().build());

        let result = manager.delete_note(42);

        assert!(matches!(result, Err(DomainError::NotFound(42))));
    }

    #[test]
    fn given_notes_when_searching_then_returns_repository_matches() {
        let mut manager = NoteManager::new(
            MockNoteRepository::builder()
                .with_note(Note::new(1, "Buy milk", NoteKind::Text))
                .with_note(Note::new(2, "Call mom", NoteKind::Text))
                .build(),
        );

        let found = manager.search_notes("MILK");
        manager.delete_note(2).expect("Delete should succeed");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), 1);
        assert_eq!(manager.list_notes().len(), 1);
    }
}
