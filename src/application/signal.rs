// src/application/signal.rs
//! Typed upward notifications from leaf components to the controller.
//!
//! Leaf components hold a [`SignalSender`]; the controller drains the
//! matching [`SignalReceiver`]. Payloads are the minimum the controller needs:
//! an id, or the note the resource just created.

use crate::domain::{Note, NoteId};
use tokio::sync::mpsc;
use tracing::{trace, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    ShowActive,
    ShowArchived,
    NoteCreated(Note),
    DeleteRequested(NoteId),
    ArchiveToggleRequested(NoteId),
}

#[derive(Debug, Clone)]
pub struct SignalSender {
    tx: mpsc::UnboundedSender<Signal>,
}

impl SignalSender {
    pub fn emit(&self, signal: Signal) {
        trace!(?signal, "Emitting signal");
        if let Err(e) = self.tx.send(signal) {
            warn!(signal = ?e.0, "No controller listening, signal dropped");
        }
    }
}

#[derive(Debug)]
pub struct SignalReceiver {
    rx: mpsc::UnboundedReceiver<Signal>,
}

impl SignalReceiver {
    /// Wait for the next signal. Returns `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<Signal> {
        self.rx.recv().await
    }

    /// Take the next queued signal without waiting.
    pub fn try_recv(&mut self) -> Option<Signal> {
        self.rx.try_recv().ok()
    }
}

pub fn channel() -> (SignalSender, SignalReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SignalSender { tx }, SignalReceiver { rx })
}
