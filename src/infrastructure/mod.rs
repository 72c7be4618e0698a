// src/infrastructure/mod.rs
pub mod config;
pub mod memory;

pub use config::Config;
pub use memory::InMemoryNoteRepository;
