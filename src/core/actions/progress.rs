use std::sync::{Arc, Mutex};

/// Single-slot mailbox carrying the latest progress percentage.
///
/// Publishing never blocks: an unconsumed value is simply replaced, so the
/// consumer only ever observes the most recent progress. Both sides hold
/// clones of the same slot.
#[derive(Debug, Clone, Default)]
pub struct ProgressSlot {
    slot: Arc<Mutex<Option<u8>>>,
}

impl ProgressSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a progress value in `[0, 100]`, replacing any unconsumed
    /// predecessor.
    pub fn publish(&self, percent: u8) {
        *self.slot.lock().unwrap() = Some(percent.min(100));
    }

    /// Takes the latest published value, leaving the slot empty.
    #[must_use]
    pub fn take(&self) -> Option<u8> {
        self.slot.lock().unwrap().take()
    }

    /// Discards any unconsumed value.
    pub fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
