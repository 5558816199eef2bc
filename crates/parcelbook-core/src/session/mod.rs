//! Interactive catalog session
//!
//! [`Session`] holds the whole application state (store, list state,
//! notes mirror, editor contents) and the two network collaborators.
//! Every user action is a method that settles before returning, so a
//! caller re-renders only after the triggering request finished.

mod guard;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, warn};

use crate::ai::{existing_note_for, DescribeBackend, DescribeError, DescribeRequest};
use crate::config::CatalogConfig;
use crate::dataset::{RecordId, RecordStore};
use crate::detail::{compose_local_draft, DetailView};
use crate::export::{ExportKind, ExportRequest};
use crate::links;
use crate::notes::{NoteEntry, NoteUpdate, NotesBackend, NotesCache};
use crate::query::{ApplyMode, CatalogState, FilterCriteria, FilterInputs};
use crate::record::ParcelRecord;
use crate::usage::UsageCatalog;

pub use guard::{ActionKind, FlightGuard, FlightToken};

/// Outcome of a user action, reported as a status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ActionStatus {
    Saved,
    Generated,
    /// The AI service answered with blank text
    Empty,
    /// Same action already in flight
    Busy,
    /// AI action disabled for this session
    Unavailable,
    NoSelection,
    /// Completion arrived for a request that is no longer current
    Stale,
    Exported(PathBuf),
    Opened(String),
    Failed(String),
}

impl ActionStatus {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ActionStatus::Saved
                | ActionStatus::Generated
                | ActionStatus::Exported(_)
                | ActionStatus::Opened(_)
        )
    }
}

/// Filter input fields of the list panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterInput {
    Region,
    Cadastral,
    Article,
    AreaMin,
    AreaMax,
    PriceMin,
    PriceMax,
}

/// An admitted AI request, detached from the session while it runs
#[derive(Debug, Clone)]
pub struct DescribeTicket {
    token: FlightToken,
    record: ParcelRecord,
    existing_note: String,
    instruction: Option<String>,
}

impl DescribeTicket {
    pub fn request(&self) -> DescribeRequest<'_> {
        DescribeRequest::new(&self.record, self.existing_note.clone())
            .with_instruction(self.instruction.as_deref())
    }
}

pub struct Session {
    store: RecordStore,
    state: CatalogState,
    inputs: FilterInputs,
    notes: NotesCache,
    draft: String,
    link_input: String,
    flights: FlightGuard,
    ai_available: bool,
    catalog: UsageCatalog,
    config: CatalogConfig,
    notes_backend: Box<dyn NotesBackend>,
    describe_backend: Box<dyn DescribeBackend>,
}

impl Session {
    pub fn new(
        store: RecordStore,
        config: CatalogConfig,
        catalog: UsageCatalog,
        notes_backend: Box<dyn NotesBackend>,
        describe_backend: Box<dyn DescribeBackend>,
    ) -> Self {
        let ai_available = describe_backend.is_configured();
        Self {
            state: CatalogState::new(config.page_size),
            store,
            inputs: FilterInputs::default(),
            notes: NotesCache::new(),
            draft: String::new(),
            link_input: String::new(),
            flights: FlightGuard::new(),
            ai_available,
            catalog,
            config,
            notes_backend,
            describe_backend,
        }
    }

    /// Show everything with the first record selected, then fetch notes.
    ///
    /// A failed notes fetch leaves the cache empty and is only logged.
    pub fn start(&mut self) -> usize {
        self.apply(ApplyMode::AutoSelectFirst);
        let loaded = self.refresh_notes();
        self.load_editor();
        loaded
    }

    /// Like [`Session::start`] but leaves the notes backend untouched
    pub fn start_offline(&mut self) {
        self.apply(ApplyMode::AutoSelectFirst);
        self.load_editor();
    }

    pub fn refresh_notes(&mut self) -> usize {
        match self.notes.refresh(self.notes_backend.as_ref()) {
            Ok(count) => count,
            Err(e) => {
                warn!(backend = %self.notes_backend.describe(), error = %e, "notes unavailable");
                0
            }
        }
    }

    // ------------------------------------------------------------------
    // List actions
    // ------------------------------------------------------------------

    /// Change one filter input and re-apply.
    ///
    /// Changing the region also selects the first result.
    pub fn set_filter(&mut self, input: FilterInput, value: &str) {
        let slot = match input {
            FilterInput::Region => &mut self.inputs.region,
            FilterInput::Cadastral => &mut self.inputs.cadastral,
            FilterInput::Article => &mut self.inputs.article,
            FilterInput::AreaMin => &mut self.inputs.area_min,
            FilterInput::AreaMax => &mut self.inputs.area_max,
            FilterInput::PriceMin => &mut self.inputs.price_min,
            FilterInput::PriceMax => &mut self.inputs.price_max,
        };
        *slot = value.to_string();

        let mode = if input == FilterInput::Region {
            ApplyMode::AutoSelectFirst
        } else {
            ApplyMode::Keep
        };
        self.apply(mode);
    }

    /// Clear every input and the selection, then select the first record
    pub fn reset(&mut self) {
        self.inputs = FilterInputs::default();
        let before = self.state.selection();
        self.state.reset(&self.store);
        self.after_selection_change(before);
    }

    pub fn load_more(&mut self) -> usize {
        self.state.load_more()
    }

    /// Select a record of the filtered sequence, wherever it sits in the window
    pub fn select(&mut self, id: RecordId) -> bool {
        let before = self.state.selection();
        if !self.state.select(id) {
            return false;
        }
        self.after_selection_change(before);
        true
    }

    /// Select the n-th visible row (0-based)
    pub fn select_visible(&mut self, position: usize) -> Option<RecordId> {
        let before = self.state.selection();
        let selected = self.state.select_visible(position)?;
        self.after_selection_change(before);
        Some(selected)
    }

    fn apply(&mut self, mode: ApplyMode) {
        let before = self.state.selection();
        let criteria = FilterCriteria::from_inputs(&self.inputs);
        self.state.apply_filters(&self.store, criteria, mode);
        self.after_selection_change(before);
    }

    fn after_selection_change(&mut self, before: Option<RecordId>) {
        if self.state.selection() == before {
            return;
        }
        debug!(
            from = ?before.map(RecordId::index),
            to = ?self.state.selection().map(RecordId::index),
            "selection_changed"
        );
        self.flights.cancel_all();
        self.load_editor();
    }

    /// Fill the editor from the selected record's note
    fn load_editor(&mut self) {
        let note = self.selected_note().cloned().unwrap_or_default();
        self.draft = note.description().to_string();
        self.link_input = note.avito_link().to_string();
    }

    // ------------------------------------------------------------------
    // Editor actions
    // ------------------------------------------------------------------

    pub fn edit_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    pub fn edit_link(&mut self, text: &str) {
        self.link_input = text.to_string();
    }

    /// Replace the draft with the offline template
    pub fn generate_local_draft(&mut self) -> ActionStatus {
        let Some(record) = self.selected_record() else {
            return ActionStatus::NoSelection;
        };
        self.draft = compose_local_draft(record, &self.catalog);
        ActionStatus::Generated
    }

    /// Admit an AI request for the selected record
    pub fn begin_generate(
        &mut self,
        instruction: Option<&str>,
    ) -> std::result::Result<DescribeTicket, ActionStatus> {
        let id = self.state.selection().ok_or(ActionStatus::NoSelection)?;
        if !self.ai_available {
            return Err(ActionStatus::Unavailable);
        }
        let token = self
            .flights
            .begin(ActionKind::Generate, id)
            .ok_or(ActionStatus::Busy)?;

        let record = self.store.record(id).clone();
        let existing_note = existing_note_for(self.selected_note(), &self.draft);
        Ok(DescribeTicket {
            token,
            record,
            existing_note,
            instruction: instruction.map(str::to_string),
        })
    }

    /// Run the AI call for an admitted ticket
    pub fn run_describe(&self, ticket: &DescribeTicket) -> Result<String, DescribeError> {
        self.describe_backend.describe(&ticket.request())
    }

    /// Settle an AI request. Generated text goes to the draft only; the
    /// notes mirror changes on an explicit save.
    pub fn complete_generate(
        &mut self,
        ticket: DescribeTicket,
        result: Result<String, DescribeError>,
    ) -> ActionStatus {
        if !self.flights.finish(&ticket.token) {
            debug!(record = ticket.token.record().index(), "stale describe result ignored");
            return ActionStatus::Stale;
        }

        match result {
            Ok(text) => {
                self.draft = text;
                ActionStatus::Generated
            }
            Err(DescribeError::EmptyResponse) => ActionStatus::Empty,
            Err(DescribeError::NotConfigured) => {
                warn!("AI description not configured; disabling for this session");
                self.ai_available = false;
                ActionStatus::Unavailable
            }
            Err(e) => {
                warn!(error = %e, "AI description failed");
                ActionStatus::Failed(e.to_string())
            }
        }
    }

    pub fn generate_ai(&mut self, instruction: Option<&str>) -> ActionStatus {
        match self.begin_generate(instruction) {
            Ok(ticket) => {
                let result = self.run_describe(&ticket);
                self.complete_generate(ticket, result)
            }
            Err(status) => status,
        }
    }

    pub fn save_description(&mut self) -> ActionStatus {
        let draft = self.draft.clone();
        self.save(ActionKind::SaveDescription, |cadastral| {
            NoteUpdate::description(cadastral, &draft)
        })
    }

    pub fn save_link(&mut self) -> ActionStatus {
        let link = self.link_input.trim().to_string();
        self.save(ActionKind::SaveLink, |cadastral| {
            NoteUpdate::avito_link(cadastral, &link)
        })
    }

    fn save<F>(&mut self, kind: ActionKind, build: F) -> ActionStatus
    where
        F: FnOnce(&str) -> NoteUpdate,
    {
        let Some(id) = self.state.selection() else {
            return ActionStatus::NoSelection;
        };
        let cadastral = self.store.record(id).primary_cadastral();
        if cadastral.is_empty() {
            return ActionStatus::Failed("record has no cadastral number".to_string());
        }
        let Some(token) = self.flights.begin(kind, id) else {
            return ActionStatus::Busy;
        };

        let update = build(&cadastral);
        let result = self.notes.save(self.notes_backend.as_ref(), &update);
        self.flights.finish(&token);

        match result {
            Ok(()) => ActionStatus::Saved,
            Err(e) => {
                warn!(cadastral = %cadastral, error = %e, "note save failed");
                ActionStatus::Failed(e.to_string())
            }
        }
    }

    /// Normalised listing link to open, if one was entered
    pub fn open_link(&self) -> ActionStatus {
        match links::external_link(&self.link_input) {
            Some(url) => ActionStatus::Opened(url),
            None => ActionStatus::Failed("no link entered".to_string()),
        }
    }

    /// Write a report for the selected record into `dir`
    pub fn export(&self, kind: ExportKind, dir: &Path, now: &DateTime<Local>) -> ActionStatus {
        let Some(record) = self.selected_record() else {
            return ActionStatus::NoSelection;
        };
        let request = ExportRequest {
            record,
            note: self.selected_note(),
            draft: self.draft.trim(),
            catalog: &self.catalog,
            map_template: &self.config.map.search_url,
        };
        match request.render(kind, now).write_to(dir) {
            Ok(path) => ActionStatus::Exported(path),
            Err(e) => ActionStatus::Failed(e.to_string()),
        }
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn selected_record(&self) -> Option<&ParcelRecord> {
        self.state.selection().map(|id| self.store.record(id))
    }

    pub fn selected_note(&self) -> Option<&NoteEntry> {
        let record = self.selected_record()?;
        self.notes.get(&record.primary_cadastral())
    }

    pub fn detail(&self) -> Option<DetailView> {
        let record = self.selected_record()?;
        Some(DetailView::build(
            &self.store,
            record,
            self.selected_note(),
            &self.catalog,
            &self.config,
        ))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    pub fn notes(&self) -> &NotesCache {
        &self.notes
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn link_input(&self) -> &str {
        &self.link_input
    }

    pub fn ai_available(&self) -> bool {
        self.ai_available
    }

    pub fn catalog(&self) -> &UsageCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}
