/// Identifier of the live status message in the target channel.
///
/// Owned by the scheduled job and passed into the publisher on every cycle. An empty
/// handle means no message is known and the next publish creates one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageHandle {
    message_id: Option<u64>,
}

impl MessageHandle {
    /// Creates an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_id(&self) -> Option<u64> {
        self.message_id
    }

    pub fn set(&mut self, message_id: u64) {
        self.message_id = Some(message_id);
    }

    /// Forgets the tracked message after it was confirmed missing.
    pub fn clear(&mut self) {
        self.message_id = None;
    }
}
