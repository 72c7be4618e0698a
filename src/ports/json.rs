// src/ports/json.rs
use crate::domain::Note;
use crate::ports::NotePresenter;
use anyhow::{Context, Result};

/// Prints notes as a pretty JSON array.
#[derive(Debug, Default)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl NotePresenter for JsonPresenter {
    fn render_list(&self, notes: &[Note]) -> Result<String> {
        serde_json::to_string_pretty(notes).context("Failed to serialize notes to JSON")
    }

    fn render_search(&self, _keyword: &str, notes: &[Note]) -> Result<String> {
        self.render_list(notes)
    }
}
