pub mod update;

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::{GridConfig, UserContext};
use crate::error::{LoadError, UpdateError};
use crate::host::envelope::{MODE_LOAD_NOTES, MODE_SAVE_NOTE, MODE_UPDATE_SCORE};
use crate::host::{HostMessage, LoadNotesEnvelope, NoteEnvelope, Notifier, ScoreEnvelope};
use crate::input::raw::RawItem;
use crate::input::{LoadPayloads, load_bundle};
use crate::model::timestamp::{format_iso_millis, to_host_date};
use crate::model::{Item, KindSet, Person, ScoreRecord};
use crate::pipeline::build_grid;
use crate::pipeline::stage3_group::GridTable;

pub use update::{ScoreUpdate, apply_update, clear_pass, patch_value};

const UNKNOWN_NOTE_AUTHOR: &str = "Unknown User";

/// Current time with the host's local offset. Stored records carry local
/// wall-clock stamps, envelopes carry UTC.
pub type Clock = fn() -> DateTime<FixedOffset>;

/// Local wall clock. Inside the WebView the browser's clock and timezone are used.
pub fn system_now() -> DateTime<FixedOffset> {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    {
        let date = js_sys::Date::new_0();
        // getTimezoneOffset is UTC minus local, in minutes.
        let east_secs = -(date.get_timezone_offset() as i32) * 60;
        FixedOffset::east_opt(east_secs)
            .and_then(|offset| {
                DateTime::from_timestamp_millis(date.get_time() as i64)
                    .map(|utc| utc.with_timezone(&offset))
            })
            .unwrap_or_default()
    }

    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    {
        chrono::Local::now().fixed_offset()
    }
}

/// One loaded grid: the host's data, the working record list and the table
/// built from them.
#[derive(Debug, Clone)]
pub struct Session {
    config: GridConfig,
    raw_items: Vec<RawItem>,
    people: Vec<Person>,
    records: Vec<ScoreRecord>,
    items: Vec<Item>,
    table: GridTable,
    clock: Clock,
}

impl Session {
    /// Validates and ingests the three payloads. Nothing is built when any of
    /// them is rejected.
    pub fn load(payloads: &LoadPayloads<'_>, config: GridConfig) -> Result<Session, LoadError> {
        let bundle = load_bundle(payloads).inspect_err(|err| {
            tracing::error!(payload = %err.payload(), error = %err, "load rejected");
        })?;
        let mut session = Session {
            config,
            raw_items: bundle.raw_items,
            people: bundle.people,
            records: bundle.records,
            items: Vec::new(),
            table: GridTable::default(),
            clock: system_now,
        };
        session.refresh();
        Ok(session)
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn table(&self) -> &GridTable {
        &self.table
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The authoritative record list, including every update applied so far.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn user(&self) -> &UserContext {
        &self.config.user
    }

    pub fn set_kinds(&mut self, kinds: KindSet) {
        self.config.kinds = kinds;
        self.refresh();
    }

    pub fn set_current_user(&mut self, user: impl Into<String>) {
        self.config.user.user = user.into();
    }

    /// Rebuilds items and table from the current records.
    pub fn refresh(&mut self) {
        let (items, table) = build_grid(
            &self.raw_items,
            &self.people,
            &self.records,
            &self.config.kinds,
        );
        tracing::info!(
            raw_items = self.raw_items.len(),
            items = items.len(),
            people = self.people.len(),
            records = self.records.len(),
            "grid built"
        );
        self.items = items;
        self.table = table;
    }

    /// Records a score entered in the grid: reports it to the host, applies it
    /// to the working records and rebuilds the table.
    pub fn apply_score_update(
        &mut self,
        mut update: ScoreUpdate,
        notifier: &mut dyn Notifier,
    ) -> Result<(), UpdateError> {
        if update.date.trim().is_empty() {
            return Err(UpdateError::MissingDate);
        }
        if update.author.trim().is_empty() {
            return Err(UpdateError::MissingAuthor);
        }
        update.date = to_host_date(update.date.trim());
        let channel = *update.channel.get_or_insert(self.config.user.user_type);
        let now = (self.clock)();

        let (skill_name, skill_header) = match self.items.iter().find(|i| i.id == update.item_id) {
            Some(item) => (item.label.clone(), item.header.clone()),
            None => {
                tracing::warn!(item = %update.item_id, "score update for an item not in the grid");
                (String::new(), String::new())
            }
        };

        notifier.notify(&HostMessage::Score(ScoreEnvelope {
            con_id: update.person_id.clone(),
            skill_id: update.item_id.clone(),
            skill_name,
            skill_header,
            value: update.value.clone(),
            pass: false,
            mode: MODE_UPDATE_SCORE,
            user: update.author.clone(),
            user_type: channel.label().to_string(),
            date: update.date.clone(),
            timestamp: format_iso_millis(now.with_timezone(&Utc)),
        }));

        let records = std::mem::take(&mut self.records);
        self.records = apply_update(records, &update, now.naive_local());
        self.refresh();
        Ok(())
    }

    /// Host-driven value patch. Returns false when the pair has no record.
    pub fn patch_score_value(&mut self, person_id: &str, item_id: &str, value: &str) -> bool {
        let found = patch_value(&mut self.records, person_id, item_id, value);
        if found {
            self.refresh();
        }
        found
    }

    pub fn clear_pass_flag(&mut self, person_id: &str, item_id: &str) -> bool {
        let found = clear_pass(&mut self.records, person_id, item_id);
        if found {
            self.refresh();
        }
        found
    }

    pub fn save_note(
        &self,
        group_name: &str,
        contact_id: &str,
        contact_name: &str,
        text: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<(), UpdateError> {
        let note_text = text.trim();
        if note_text.is_empty() {
            return Err(UpdateError::EmptyNote);
        }
        let author = match self.config.user.user.trim() {
            "" => UNKNOWN_NOTE_AUTHOR.to_string(),
            user => user.to_string(),
        };
        notifier.notify(&HostMessage::Note(NoteEnvelope {
            group_name: group_name.to_string(),
            contact_id: contact_id.to_string(),
            contact_name: contact_name.to_string(),
            note_text: note_text.to_string(),
            timestamp: format_iso_millis((self.clock)().with_timezone(&Utc)),
            author,
            mode: MODE_SAVE_NOTE,
        }));
        Ok(())
    }

    /// Asks the host for the notes of a group, or of one person in it.
    pub fn request_notes(&self, group_name: &str, contact_id: &str, notifier: &mut dyn Notifier) {
        notifier.notify(&HostMessage::LoadNotes(LoadNotesEnvelope {
            group_name: group_name.to_string(),
            contact_id: contact_id.to_string(),
            mode: MODE_LOAD_NOTES,
        }));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/mod.rs"]
mod tests;
