//! Score reconciliation and table assembly for an embedded skills grid.
//!
//! Raw item definitions, people and append-only score records go in; one
//! display-ready cell per (item, person) comes out, choosing between staff
//! and self observations.

pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod session;

pub use config::{GridConfig, UserContext};
pub use error::{HostError, LoadError, PayloadError, ShapeError, UpdateError};
pub use host::{HostMessage, Notifier};
pub use input::LoadPayloads;
pub use pipeline::stage3_group::GridTable;
pub use session::{ScoreUpdate, Session};
