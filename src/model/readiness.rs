use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UpdateError;
use crate::model::cell::PLACEHOLDER;

/// Structured value stored for personal readiness items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessValue {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub meets_standard: String,
}

impl ReadinessValue {
    pub fn new(
        status: impl Into<String>,
        comments: impl Into<String>,
        meets_standard: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            comments: comments.into(),
            meets_standard: meets_standard.into(),
        }
    }

    pub fn encode(&self) -> Result<String, UpdateError> {
        if self.status.is_empty() {
            return Err(UpdateError::MissingStatus);
        }
        if self.meets_standard.is_empty() {
            return Err(UpdateError::MissingMeetsStandard);
        }
        serde_json::to_string(self).map_err(|e| UpdateError::Encode(e.to_string()))
    }

    pub fn decode(raw: &str) -> Option<ReadinessValue> {
        serde_json::from_str(raw).ok()
    }
}

/// Display text for a stored readiness value: `status (meetsStandard)`.
///
/// JSON without a status shows the placeholder; text that is not JSON at all
/// is shown as-is.
pub fn display_readiness(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => {
            let status = value
                .get("status")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty());
            match status {
                Some(status) => {
                    let meets = value
                        .get("meetsStandard")
                        .and_then(Value::as_str)
                        .unwrap_or("");
                    format!("{status} ({meets})")
                }
                None => PLACEHOLDER.to_string(),
            }
        }
        Err(_) if raw.is_empty() => PLACEHOLDER.to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/readiness.rs"]
mod tests;
