pub mod driver;
pub mod envelope;
pub mod notes;
#[cfg(feature = "wasm")]
pub mod wasm;

use std::io::Write;

pub use envelope::{HostMessage, LoadNotesEnvelope, NoteEnvelope, ScoreEnvelope};
pub use notes::{Note, parse_notes};

/// Outbound channel to the host runtime. Calls are fire and forget: the grid
/// never waits on or inspects the host's reaction.
pub trait Notifier {
    fn notify(&mut self, message: &HostMessage);
}

/// Keeps every message, for tests and for replaying a session.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<HostMessage>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &HostMessage) {
        self.messages.push(message.clone());
    }
}

/// Writes one compact JSON object per line.
pub struct JsonLineNotifier<W: Write> {
    out: W,
}

impl<W: Write> JsonLineNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for JsonLineNotifier<W> {
    fn notify(&mut self, message: &HostMessage) {
        let written = message
            .to_json()
            .map_err(std::io::Error::other)
            .and_then(|line| writeln!(self.out, "{line}"));
        if let Err(err) = written {
            tracing::warn!(mode = message.mode(), error = %err, "host message not delivered");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/host/mod.rs"]
mod tests;
