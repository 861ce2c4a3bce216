pub mod cell;
pub mod item;
pub mod person;
pub mod readiness;
pub mod record;
pub mod timestamp;

pub use cell::{CellMetadata, Observation, PLACEHOLDER, ResolvedCell};
pub use item::{DEFAULT_HEADER, Item, ItemKind, ItemOption, KindSet};
pub use person::Person;
pub use readiness::ReadinessValue;
pub use record::{Channel, ChannelTag, ScoreRecord};
