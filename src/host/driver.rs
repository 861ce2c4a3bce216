//! Host-facing state behind the WebView entry points.
//!
//! `GridHost` keeps what survives between loads (the item type selection and
//! a current user set before any table exists) next to the loaded session.

use crate::config::{GridConfig, UserContext};
use crate::error::HostError;
use crate::host::Notifier;
use crate::input::LoadPayloads;
use crate::model::{Channel, ItemKind, KindSet};
use crate::report::json::render_table_json;
use crate::session::{Clock, ScoreUpdate, Session, system_now};

#[derive(Debug, Clone)]
pub struct GridHost {
    kinds: KindSet,
    pending_user: Option<String>,
    session: Option<Session>,
    clock: Clock,
}

impl Default for GridHost {
    fn default() -> Self {
        Self {
            kinds: KindSet::default(),
            pending_user: None,
            session: None,
            clock: system_now,
        }
    }
}

impl GridHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        if let Some(session) = self.session.take() {
            self.session = Some(session.with_clock(clock));
        }
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn kinds(&self) -> &KindSet {
        &self.kinds
    }

    /// Rejected payloads leave the previous table in place. A blank `user`
    /// falls back to the one given through `set_current_user`.
    pub fn load_table(
        &mut self,
        payloads: &LoadPayloads<'_>,
        user: Option<&str>,
        date: Option<&str>,
        user_type: Option<&str>,
    ) -> Result<(), HostError> {
        let user = match user.map(str::trim) {
            Some(u) if !u.is_empty() => Some(u),
            _ => self.pending_user.as_deref(),
        };
        let config = GridConfig::default()
            .with_kinds(self.kinds.clone())
            .with_user(UserContext::from_host(user, date, user_type));
        let session = Session::load(payloads, config)?.with_clock(self.clock);
        self.session = Some(session);
        Ok(())
    }

    /// A blank or missing `channel` uses the session's user type.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_score_update(
        &mut self,
        item_id: &str,
        person_id: &str,
        channel: Option<&str>,
        value: &str,
        author: &str,
        date: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<(), HostError> {
        let session = self.session.as_mut().ok_or(HostError::NotLoaded)?;
        let mut update = ScoreUpdate::new(item_id, person_id, value, author, date);
        match channel.map(str::trim) {
            Some(label) if !label.is_empty() => {
                let parsed = label
                    .parse::<Channel>()
                    .map_err(|_| HostError::UnknownChannel(label.to_string()))?;
                update = update.with_channel(parsed);
            }
            _ => {}
        }
        session.apply_score_update(update, notifier)?;
        Ok(())
    }

    /// Unknown labels are dropped. The selection also applies to later loads.
    pub fn set_types<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kinds = KindSet::new(
            labels
                .into_iter()
                .filter_map(|label| {
                    let kind = ItemKind::from_label(label.as_ref());
                    if kind.is_none() {
                        tracing::debug!(label = label.as_ref(), "unknown item type ignored");
                    }
                    kind
                })
                .collect::<Vec<_>>(),
        );
        self.kinds = kinds.clone();
        if let Some(session) = self.session.as_mut() {
            session.set_kinds(kinds);
        }
    }

    pub fn refresh_table(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.refresh();
        }
    }

    /// Kept for the next load as well as applied to the current session.
    pub fn set_current_user(&mut self, user: &str) {
        self.pending_user = Some(user.to_string());
        if let Some(session) = self.session.as_mut() {
            session.set_current_user(user);
        }
    }

    pub fn update_score(&mut self, person_id: &str, item_id: &str, value: &str) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.patch_score_value(person_id, item_id, value))
    }

    pub fn update_pass_checkbox(&mut self, person_id: &str, item_id: &str) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.clear_pass_flag(person_id, item_id))
    }

    pub fn save_note(
        &self,
        group_name: &str,
        contact_id: &str,
        contact_name: &str,
        text: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<(), HostError> {
        let session = self.session.as_ref().ok_or(HostError::NotLoaded)?;
        session.save_note(group_name, contact_id, contact_name, text, notifier)?;
        Ok(())
    }

    pub fn load_notes(
        &self,
        group_name: &str,
        contact_id: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<(), HostError> {
        let session = self.session.as_ref().ok_or(HostError::NotLoaded)?;
        session.request_notes(group_name, contact_id, notifier);
        Ok(())
    }

    /// The current table for the renderer; an empty table before the first load.
    pub fn table_json(&self) -> Result<String, HostError> {
        let rendered = match self.session.as_ref() {
            Some(session) => render_table_json(session.table()),
            None => render_table_json(&Default::default()),
        };
        Ok(rendered?)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/host/driver.rs"]
mod tests;
