// src/domain/note.rs
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

use crate::constants::TIMESTAMP_FORMAT;
use crate::domain::DomainError;

/// Note type as requested by callers of the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteType {
    Text,
    Reminder,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Text => "text",
            NoteType::Reminder => "reminder",
        }
    }
}

impl FromStr for NoteType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(NoteType::Text),
            "reminder" => Ok(NoteType::Reminder),
            other => Err(DomainError::InvalidKind(other.to_string())),
        }
    }
}

/// Variant specific state of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NoteKind {
    Text,
    Reminder {
        #[serde(serialize_with = "serialize_timestamp")]
        reminder_time: NaiveDateTime,
    },
}

impl NoteKind {
    /// Parse a reminder time in `YYYY-MM-DD HH:MM:SS` form.
    ///
    /// Seconds run 00..59; chrono's leap second form (`:60`) is rejected.
    /// No check is made that the time lies in the future.
    pub fn reminder(input: &str) -> Result<Self, DomainError> {
        let reminder_time = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
            .map_err(|source| DomainError::ParseError {
                input: input.to_string(),
                source: Some(source),
            })?;

        if reminder_time.nanosecond() >= 1_000_000_000 {
            return Err(DomainError::ParseError {
                input: input.to_string(),
                source: None,
            });
        }
        Ok(NoteKind::Reminder { reminder_time })
    }

    fn header(&self) -> &'static str {
        match self {
            NoteKind::Text => "=== Text Note ===",
            NoteKind::Reminder { .. } => "=== Reminder Note ===",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: u64,
    content: String,
    #[serde(serialize_with = "serialize_timestamp")]
    created_at: NaiveDateTime,
    #[serde(flatten)]
    kind: NoteKind,
}

impl Note {
    /// Create a note stamped with the current local time.
    pub fn new(id: u64, content: impl Into<String>, kind: NoteKind) -> Self {
        Self::with_created_at(id, content, kind, Local::now().naive_local())
    }

    pub fn with_created_at(
        id: u64,
        content: impl Into<String>,
        kind: NoteKind,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
            kind,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn kind(&self) -> &NoteKind {
        &self.kind
    }

    pub fn reminder_time(&self) -> Option<NaiveDateTime> {
        match self.kind {
            NoteKind::Text => None,
            NoteKind::Reminder { reminder_time } => Some(reminder_time),
        }
    }

    /// Case-insensitive substring match against the content.
    pub fn matches(&self, keyword: &str) -> bool {
        self.content
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// Multi-line description, header first, without a trailing newline.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.kind.header().to_string(),
            format!("ID: {}", self.id),
            format!("Content: {}", self.content),
            format!("Created At: {}", self.created_at.format(TIMESTAMP_FORMAT)),
        ];
        if let NoteKind::Reminder { reminder_time } = &self.kind {
            lines.push(format!(
                "Reminder Time: {}",
                reminder_time.format(TIMESTAMP_FORMAT)
            ));
        }
        lines.join("\n")
    }
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
}
