// src/ports/text.rs
use crate::constants::DEFAULT_SEPARATOR_WIDTH;
use crate::domain::Note;
use crate::ports::NotePresenter;
use anyhow::Result;

/// Plain text blocks, one per note, each followed by a dashed rule.
#[derive(Debug)]
pub struct TextPresenter {
    separator: String,
}

impl TextPresenter {
    pub fn new(separator_width: usize) -> Self {
        Self {
            separator: "-".repeat(separator_width),
        }
    }

    fn render_blocks(&self, notes: &[Note]) -> String {
        notes
            .iter()
            .map(|note| format!("{}\n{}", note.render(), self.separator))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR_WIDTH)
    }
}

impl NotePresenter for TextPresenter {
    fn render_list(&self, notes: &[Note]) -> Result<String> {
        if notes.is_empty() {
            return Ok("No notes found.".to_string());
        }
        Ok(self.render_blocks(notes))
    }

    fn render_search(&self, keyword: &str, notes: &[Note]) -> Result<String> {
        if notes.is_empty() {
            return Ok(format!(
                "No notes found containing the keyword '{}'.",
                keyword
            ));
        }
        Ok(format!(
            "Found {} note(s) containing the keyword '{}':\n{}",
            notes.len(),
            keyword,
            self.render_blocks(notes)
        ))
    }
}
