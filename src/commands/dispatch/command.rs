//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use parcelbook_core::ai;
use parcelbook_core::config::CatalogConfig;
use parcelbook_core::dataset::{RecordId, RecordStore};
use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::notes::{self, NotesBackend};
use parcelbook_core::session::Session;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: PathBuf, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Configuration file, then environment, then command-line flags
    pub fn config(&self) -> Result<CatalogConfig> {
        let explicit = self.cli.config.as_deref().map(|p| self.absolute(p));
        let mut config = CatalogConfig::discover(explicit.as_deref(), &self.cwd)?;
        config.apply_env(&self.cwd);

        if let Some(dataset) = &self.cli.dataset {
            config.dataset = self.absolute(dataset);
        }
        if let Some(url) = &self.cli.notes_url {
            config.notes.url = Some(url.clone()).filter(|u| !u.trim().is_empty());
        }
        if let Some(file) = &self.cli.notes_file {
            config.notes.file = self.absolute(file);
            // An explicit file beats a configured service
            if self.cli.notes_url.is_none() {
                config.notes.url = None;
            }
        }
        if let Some(url) = &self.cli.ai_url {
            config.ai.url = Some(url.clone()).filter(|u| !u.trim().is_empty());
        }

        trace_command!(self.cli, self.start, "load_config");
        Ok(config)
    }

    pub fn open_store(&self, config: &CatalogConfig) -> Result<RecordStore> {
        let store = RecordStore::from_csv_path(&config.dataset_path())?;
        trace_command!(self.cli, self.start, "load_dataset");
        Ok(store)
    }

    pub fn notes_backend(&self, config: &CatalogConfig) -> Box<dyn NotesBackend> {
        notes::backend_for(config.notes.url.as_deref(), config.notes_file_path())
    }

    /// Build a started session: everything visible, first record selected,
    /// notes fetched
    pub fn session(&self) -> Result<Session> {
        let mut session = self.new_session()?;
        session.start();
        trace_command!(self.cli, self.start, "start_session");
        Ok(session)
    }

    /// Started session for commands that never show notes; the notes
    /// backend is not contacted
    pub fn session_without_notes(&self) -> Result<Session> {
        let mut session = self.new_session()?;
        session.start_offline();
        trace_command!(self.cli, self.start, "start_session_offline");
        Ok(session)
    }

    /// Started session with `target` selected
    pub fn session_for(&self, target: &str) -> Result<(Session, RecordId)> {
        let mut session = self.session()?;
        let id = session.store().resolve(target)?;
        if !session.select(id) {
            return Err(CatalogError::record_not_found(target));
        }
        Ok((session, id))
    }

    fn new_session(&self) -> Result<Session> {
        let config = self.config()?;
        let store = self.open_store(&config)?;
        let catalog = config.usage_catalog()?;
        let notes_backend = self.notes_backend(&config);
        let describe_backend = ai::backend_for(config.ai.url.as_deref(), config.ai_timeout());

        Ok(Session::new(store, config, catalog, notes_backend, describe_backend))
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("parcelbook {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A land-parcel catalog browser.");
        println!();
        println!("Run `parcelbook --help` for usage information.");
        Ok(())
    }
}
