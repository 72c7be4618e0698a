use smartnotes::application::{NoteManager, NoteRepository};
use smartnotes::cli::Shell;
use smartnotes::infrastructure::InMemoryNoteRepository;
use smartnotes::ports::{NotePresenter, TextPresenter};
use anyhow::Result;
use std::io::Cursor;

/// Output of a scripted shell session plus the manager it left behind
#[allow(dead_code)]
pub struct Session {
    pub output: String,
    pub manager: NoteManager<InMemoryNoteRepository>,
}

/// Feed `input` to a fresh shell backed by an empty in-memory repository
#[allow(dead_code)]
pub fn run_session(input: &str) -> Result<Session> {
    run_session_with(input, Box::new(TextPresenter::default()))
}

#[allow(dead_code)]
pub fn run_session_with(input: &str, presenter: Box<dyn NotePresenter>) -> Result<Session> {
    let mut output = Vec::new();
    let manager = {
        let mut shell = Shell::new(
            NoteManager::new(InMemoryNoteRepository::new()),
            presenter,
            Cursor::new(input.as_bytes()),
            &mut output,
        );
        shell.run()?;
        shell.into_manager()
    };

    Ok(Session {
        output: String::from_utf8(output)?,
        manager,
    })
}

/// Repository pre-filled with the notes used across scenarios
#[allow(dead_code)]
pub fn seeded_repository() -> Result<InMemoryNoteRepository> {
    let mut repo = InMemoryNoteRepository::new();
    repo.add("text", "Buy milk", None)?;
    repo.add("reminder", "Call mom", Some("2024-06-01 09:00:00"))?;
    repo.add("text", "Milkshake recipe", None)?;
    Ok(repo)
}

/// Known note IDs in `seeded_repository`
#[allow(dead_code)]
pub mod seeded_notes {
    pub const BUY_MILK: u64 = 1;
    pub const CALL_MOM: u64 = 2;
    pub const MILKSHAKE: u64 = 3;

    pub const NONEXISTENT: u64 = 999;
}
