//! Entry points for the embedding WebView.
//!
//! The host page constructs one `SkillGridHost` with its script callback and
//! forwards its global calls to it. Every outbound message is handed to the
//! callback as a single JSON string. State lives in [`GridHost`].

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use crate::error::HostError;
use crate::host::driver::GridHost;
use crate::host::{HostMessage, Notifier, parse_notes};
use crate::input::LoadPayloads;

struct CallbackNotifier<'a> {
    callback: &'a Function,
}

impl Notifier for CallbackNotifier<'_> {
    fn notify(&mut self, message: &HostMessage) {
        let json = match message.to_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(mode = message.mode(), error = %err, "host message not encoded");
                return;
            }
        };
        if let Err(err) = self.callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
            tracing::warn!(mode = message.mode(), error = ?err, "host callback failed");
        }
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        js_error(err)
    }
}

#[wasm_bindgen]
pub struct SkillGridHost {
    callback: Function,
    host: GridHost,
}

impl SkillGridHost {
    fn notifier(&self) -> CallbackNotifier<'_> {
        CallbackNotifier {
            callback: &self.callback,
        }
    }
}

#[wasm_bindgen]
impl SkillGridHost {
    #[wasm_bindgen(constructor)]
    pub fn new(callback: Function) -> SkillGridHost {
        SkillGridHost {
            callback,
            host: GridHost::new(),
        }
    }

    /// Rejected payloads leave the previous table in place and return the
    /// message to show.
    #[wasm_bindgen(js_name = loadTable)]
    pub fn load_table(
        &mut self,
        assessment_data: Option<String>,
        contact_data: Option<String>,
        score_data: Option<String>,
        user: Option<String>,
        date: Option<String>,
        user_type: Option<String>,
    ) -> Result<(), JsValue> {
        let payloads = LoadPayloads {
            items: assessment_data.as_deref(),
            people: contact_data.as_deref(),
            scores: score_data.as_deref(),
        };
        self.host.load_table(
            &payloads,
            user.as_deref(),
            date.as_deref(),
            user_type.as_deref(),
        )?;
        Ok(())
    }

    /// `channel` is "Staff" or "Self"; empty uses the session's user type.
    #[wasm_bindgen(js_name = applyScoreUpdate)]
    pub fn apply_score_update(
        &mut self,
        item_id: String,
        person_id: String,
        channel: Option<String>,
        value: String,
        author: String,
        date: String,
    ) -> Result<(), JsValue> {
        let mut notifier = CallbackNotifier {
            callback: &self.callback,
        };
        self.host.apply_score_update(
            &item_id,
            &person_id,
            channel.as_deref(),
            &value,
            &author,
            &date,
            &mut notifier,
        )?;
        Ok(())
    }

    /// Unknown labels are ignored.
    #[wasm_bindgen(js_name = setTypes)]
    pub fn set_types(&mut self, types: Array) {
        self.host.set_types(types.iter().filter_map(|t| t.as_string()));
    }

    #[wasm_bindgen(js_name = refreshTable)]
    pub fn refresh_table(&mut self) {
        self.host.refresh_table();
    }

    #[wasm_bindgen(js_name = setCurrentUser)]
    pub fn set_current_user(&mut self, user: String) {
        self.host.set_current_user(&user);
    }

    #[wasm_bindgen(js_name = updateScore)]
    pub fn update_score(&mut self, contact_id: String, skill_id: String, value: String) -> bool {
        self.host.update_score(&contact_id, &skill_id, &value)
    }

    #[wasm_bindgen(js_name = updatePassCheckbox)]
    pub fn update_pass_checkbox(&mut self, contact_id: String, skill_id: String) -> bool {
        self.host.update_pass_checkbox(&contact_id, &skill_id)
    }

    #[wasm_bindgen(js_name = saveNote)]
    pub fn save_note(
        &self,
        group_name: String,
        contact_id: String,
        contact_name: String,
        note_text: String,
    ) -> Result<(), JsValue> {
        self.host.save_note(
            &group_name,
            &contact_id,
            &contact_name,
            &note_text,
            &mut self.notifier(),
        )?;
        Ok(())
    }

    #[wasm_bindgen(js_name = loadNotes)]
    pub fn load_notes(&self, group_name: String, contact_id: String) -> Result<(), JsValue> {
        self.host.load_notes(&group_name, &contact_id, &mut self.notifier())?;
        Ok(())
    }

    /// Normalizes the host's `displayNotes` payload and returns it as JSON.
    #[wasm_bindgen(js_name = parseNotes)]
    pub fn parse_notes(notes_data: String) -> Result<String, JsValue> {
        let notes = parse_notes(&notes_data).map_err(js_error)?;
        serde_json::to_string(&notes).map_err(js_error)
    }

    /// The current table for the renderer; an empty table before the first load.
    #[wasm_bindgen(js_name = tableJson)]
    pub fn table_json(&self) -> Result<String, JsValue> {
        Ok(self.host.table_json()?)
    }
}
