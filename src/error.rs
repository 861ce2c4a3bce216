use std::fmt;

use thiserror::Error;

/// The three payloads the host hands over on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Assessment,
    Contact,
    Score,
}

impl Payload {
    pub fn name(self) -> &'static str {
        match self {
            Payload::Assessment => "assessmentData",
            Payload::Contact => "contactData",
            Payload::Score => "scoreData",
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input is valid JSON but not list/record shaped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{payload} {detail}")]
pub struct ShapeError {
    pub payload: Payload,
    pub detail: String,
}

impl ShapeError {
    pub fn new(payload: Payload, detail: impl Into<String>) -> Self {
        Self {
            payload,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("{0} is empty or null")]
    Empty(Payload),
    #[error("{0} does not appear to be valid JSON (doesn't start with [ or {{)")]
    NotJson(Payload),
    #[error("{0} appears to be incomplete JSON (doesn't end with ] or }})")]
    Incomplete(Payload),
    #[error("{payload} JSON parse error: {message}. Content preview: {preview}...")]
    Parse {
        payload: Payload,
        message: String,
        preview: String,
    },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl PayloadError {
    pub fn payload(&self) -> Payload {
        match self {
            PayloadError::Empty(p) | PayloadError::NotJson(p) | PayloadError::Incomplete(p) => *p,
            PayloadError::Parse { payload, .. } => *payload,
            PayloadError::Shape(e) => e.payload,
        }
    }
}

/// A load that produced no table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct LoadError(#[from] pub PayloadError);

impl LoadError {
    pub fn payload(&self) -> Payload {
        self.0.payload()
    }

    /// Text shown to the person using the grid.
    pub fn user_message(&self) -> String {
        format!("Error loading data: {}", self.0)
    }
}

impl From<ShapeError> for LoadError {
    fn from(value: ShapeError) -> Self {
        LoadError(PayloadError::Shape(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("Please enter a user name.")]
    MissingAuthor,
    #[error("Please select a date.")]
    MissingDate,
    #[error("Please select a current status.")]
    MissingStatus,
    #[error("Please select whether this meets the standard.")]
    MissingMeetsStandard,
    #[error("Please enter a note before saving.")]
    EmptyNote,
    #[error("could not encode value: {0}")]
    Encode(String),
}

/// A host call that could not be carried out.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no table loaded")]
    NotLoaded,
    #[error("{}", .0.user_message())]
    Load(#[from] LoadError),
    #[error(transparent)]
    Update(#[from] UpdateError),
    #[error("unknown user type: {0} (use Staff|Self)")]
    UnknownChannel(String),
    #[error("could not encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
