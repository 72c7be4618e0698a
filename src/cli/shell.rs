// src/cli/shell.rs
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{NoteManager, NoteRepository};
use crate::constants::{DEFAULT_GREETING, TIMESTAMP_HINT};
use crate::domain::DomainError;
use crate::ports::NotePresenter;

/// Menu entries in display order, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddText,
    AddReminder,
    List,
    Search,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddText,
        MenuChoice::AddReminder,
        MenuChoice::List,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddText => "Add a Text Note",
            MenuChoice::AddReminder => "Add a Reminder Note",
            MenuChoice::List => "View All Notes",
            MenuChoice::Search => "Search Notes",
            MenuChoice::Delete => "Delete a Note",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddText),
            "2" => Ok(MenuChoice::AddReminder),
            "3" => Ok(MenuChoice::List),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::Delete),
            "6" => Ok(MenuChoice::Exit),
            "" => Err(DomainError::InvalidInput("empty menu selection".to_string())),
            other => Err(DomainError::InvalidInput(format!(
                "unknown menu selection '{}'",
                other
            ))),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over any line-based input and output.
///
/// Domain errors are reported and the loop carries on; only I/O failures
/// on `input`/`output` end it with an error. End of input ends it cleanly.
pub struct Shell<R: NoteRepository, I: BufRead, O: Write> {
    manager: NoteManager<R>,
    presenter: Box<dyn NotePresenter>,
    greeting: String,
    input: I,
    output: O,
}

impl<R: NoteRepository, I: BufRead, O: Write> Shell<R, I, O> {
    pub fn new(
        manager: NoteManager<R>,
        presenter: Box<dyn NotePresenter>,
        input: I,
        output: O,
    ) -> Self {
        Self {
            manager,
            presenter,
            greeting: DEFAULT_GREETING.to_string(),
            input,
            output,
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn into_manager(self) -> NoteManager<R> {
        self.manager
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive shell");
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                info!("Input closed, leaving shell");
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "Menu selection");
                    self.dispatch(choice)?
                }
                Err(e) => {
                    debug!(%e, "Rejected menu input");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddText => self.add_text(),
            MenuChoice::AddReminder => self.add_reminder(),
            MenuChoice::List => self.list(),
            MenuChoice::Search => self.search(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting the Smart Notes Manager. Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", self.greeting)?;
        for (number, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, choice.label())?;
        }
        Ok(())
    }

    /// Print `text` and read one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn add_text(&mut self) -> Result<Flow> {
        let Some(content) = self.prompt("Enter the note content: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.manager.add_text(&content);
        self.report_added(result)?;
        Ok(Flow::Continue)
    }

    fn add_reminder(&mut self) -> Result<Flow> {
        let Some(content) = self.prompt("Enter the note content: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(reminder_time) =
            self.prompt(&format!("Enter the reminder time ({}): ", TIMESTAMP_HINT))?
        else {
            return Ok(Flow::Exit);
        };
        let result = self.manager.add_reminder(&content, &reminder_time);
        self.report_added(result)?;
        Ok(Flow::Continue)
    }

    fn report_added(&mut self, result: Result<u64, DomainError>) -> Result<()> {
        match result {
            Ok(id) => writeln!(self.output, "Note added successfully with ID: {}", id)?,
            Err(e) => {
                debug!(%e, "Failed to add note");
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    fn list(&mut self) -> Result<Flow> {
        let notes = self.manager.list_notes();
        let rendered = self.presenter.render_list(&notes)?;
        writeln!(self.output, "{}", rendered)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(keyword) = self.prompt("Enter the keyword to search: ")? else {
            return Ok(Flow::Exit);
        };
        let notes = self.manager.search_notes(&keyword);
        let rendered = self.presenter.render_search(&keyword, &notes)?;
        writeln!(self.output, "{}", rendered)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(raw_id) = self.prompt("Enter the ID of the note to delete: ")? else {
            return Ok(Flow::Exit);
        };

        let raw_id = match parse_note_id(&raw_id) {
            Ok(raw_id) => raw_id,
            Err(e) => {
                debug!(%e, "Rejected note ID");
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        // IDs start at 1, so a negative number can never match a note
        let Ok(id) = u64::try_from(raw_id) else {
            writeln!(self.output, "Note with ID {} not found.", raw_id)?;
            return Ok(Flow::Continue);
        };

        match self.manager.delete_note(id) {
            Ok(()) => writeln!(self.output, "Note with ID {} deleted successfully.", id)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }
}

/// Any integer is accepted here; only non-numeric input is invalid.
fn parse_note_id(raw: &str) -> Result<i64, DomainError> {
    let raw = raw.trim();
    raw.parse::<i64>().map_err(|_| {
        DomainError::InvalidInput(format!("'{}' is not a valid note ID", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", MenuChoice::AddText)]
    #[case("2", MenuChoice::AddReminder)]
    #[case(" 3 ", MenuChoice::List)]
    #[case("4", MenuChoice::Search)]
    #[case("5", MenuChoice::Delete)]
    #[case("6\r", MenuChoice::Exit)]
    fn given_menu_number_when_parsing_then_maps_to_choice(
        #[case] input: &str,
        #[case] expected: MenuChoice,
    ) {
        assert_eq!(input.parse::<MenuChoice>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("7")]
    #[case("exit")]
    fn given_unknown_menu_input_when_parsing_then_returns_invalid_input(#[case] input: &str) {
        assert!(matches!(
            input.parse::<MenuChoice>(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn given_non_numeric_id_when_parsing_then_reports_invalid_input() {
        let err = parse_note_id("abc").unwrap_err();

        assert_eq!(err.to_string(), "Invalid input: 'abc' is not a valid note ID");
        assert_eq!(parse_note_id(" 12 ").unwrap(), 12);
        assert_eq!(parse_note_id("-1").unwrap(), -1);
        assert!(parse_note_id("1.5").is_err());
    }
}
