// src/application/mod.rs
pub mod note_manager;
pub mod note_repository;

pub use note_manager::NoteManager;
pub use note_repository::NoteRepository;
