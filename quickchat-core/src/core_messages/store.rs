/*
    store.rs - In-memory message registries

    Owns the three registries a message can be filed into. Earlier
    versions of the app kept these as process-wide state; the store is
    an owned value so every caller (and every test) gets independent
    registries.

    Rules the store upholds:
    - file() places each message into exactly one registry
    - filed messages are reachable only through shared slices, so they
      never change after filing
    - delete_by_digest() touches the stored registry alone; sent and
      disregarded messages are permanent history
*/

use crate::core_messages::errors::StoreResult;
use crate::core_messages::model::{Disposition, Message};
use tracing::{debug, info};

/// Owned in-memory registries for filed messages
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    sent: Vec<Message>,
    stored: Vec<Message>,
    disregarded: Vec<Message>,
}

impl MessageStore {
    /// Create a store with all three registries empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// File a message into the registry selected by `disposition` and
    /// return the confirmation line the console shows the user.
    pub fn file(&mut self, message: Message, disposition: Disposition) -> String {
        debug!(id = %message.id, registry = %disposition, "filing message");
        self.registry_mut(disposition).push(message);
        match disposition {
            Disposition::Sent => "Message successfully sent.".to_string(),
            Disposition::Disregarded => "Message discarded.".to_string(),
            Disposition::Stored => "Message successfully stored.".to_string(),
        }
    }

    /// File a message by console action code (1 = send, 2 = disregard,
    /// 3 = store). Unknown codes leave the store untouched.
    pub fn file_by_code(&mut self, message: Message, code: u8) -> StoreResult<String> {
        let disposition = Disposition::from_action_code(code)?;
        Ok(self.file(message, disposition))
    }

    /// Remove the first stored message whose content digest matches.
    ///
    /// The digest comparison is case-insensitive on the caller's side;
    /// computed digests are always uppercase. Returns the removed
    /// message, or `None` when nothing matches, so deleting the same
    /// digest twice is a no-op.
    pub fn delete_by_digest(&mut self, digest: &str) -> Option<Message> {
        let wanted = digest.to_ascii_uppercase();
        let position = self
            .stored
            .iter()
            .position(|message| message.content_digest() == wanted)?;
        let removed = self.stored.remove(position);
        info!(id = %removed.id, "deleted stored message by digest");
        Some(removed)
    }

    /// Messages that have been sent, oldest first.
    pub fn sent(&self) -> &[Message] {
        &self.sent
    }

    /// Messages kept to send later, oldest first.
    pub fn stored(&self) -> &[Message] {
        &self.stored
    }

    /// Messages the user disregarded, oldest first.
    pub fn disregarded(&self) -> &[Message] {
        &self.disregarded
    }

    /// The registry for `disposition`, oldest first.
    pub fn registry(&self, disposition: Disposition) -> &[Message] {
        match disposition {
            Disposition::Sent => &self.sent,
            Disposition::Disregarded => &self.disregarded,
            Disposition::Stored => &self.stored,
        }
    }

    /// Count of messages filed across every registry.
    pub fn total_messages(&self) -> usize {
        self.sent.len() + self.stored.len() + self.disregarded.len()
    }

    /// True when no message has been filed anywhere.
    pub fn is_empty(&self) -> bool {
        self.total_messages() == 0
    }

    /// Empty every registry.
    pub fn clear(&mut self) {
        self.sent.clear();
        self.stored.clear();
        self.disregarded.clear();
        debug!("cleared all message registries");
    }

    fn registry_mut(&mut self, disposition: Disposition) -> &mut Vec<Message> {
        match disposition {
            Disposition::Sent => &mut self.sent,
            Disposition::Disregarded => &mut self.disregarded,
            Disposition::Stored => &mut self.stored,
        }
    }
}
