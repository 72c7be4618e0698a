// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io;

use anyhow::{Context, Result};
use application::NoteManager;
use cli::Shell;
use infrastructure::{config, Config, InMemoryNoteRepository};
use ports::{JsonPresenter, NotePresenter, TextPresenter};
use tracing::{debug, info};
use crate::cli::args::Args;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting smartnotes with arguments");

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(config::default_config_path)
            .context("Could not determine a config directory")?;
        config::init_config(&path)?;
        info!(?path, "Created default config");
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)?
        }
        None => Config::load_or_default(config::default_config_path().as_deref())?,
    };
    debug!(?config, "Resolved configuration");

    // Initialize application
    let manager = NoteManager::new(InMemoryNoteRepository::new());

    // Initialize presentation
    let presenter: Box<dyn NotePresenter> = if args.json || config.display.json {
        Box::new(JsonPresenter::new())
    } else {
        Box::new(TextPresenter::new(config.display.separator_width))
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(manager, presenter, stdin.lock(), stdout.lock())
        .with_greeting(config.shell.greeting);
    shell.run()
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
