// src/ports/mod.rs
pub mod json;
pub mod text;

use crate::domain::Note;
use anyhow::Result;

pub use json::JsonPresenter;
pub use text::TextPresenter;

/// Turns query results into what the shell prints.
pub trait NotePresenter {
    fn render_list(&self, notes: &[Note]) -> Result<String>;

    fn render_search(&self, keyword: &str, notes: &[Note]) -> Result<String>;
}
