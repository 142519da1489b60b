/*
    query.rs - Read-only queries over the message registries

    Lookups for the console layer. Nothing here mutates the store;
    string rendering of the results lives in reports.rs.
*/

use crate::core_messages::model::{Disposition, Message};
use crate::core_messages::store::MessageStore;

/// A query hit: the message together with the registry it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiledMessage<'a> {
    /// Registry the message was filed into
    pub disposition: Disposition,
    /// The filed message itself
    pub message: &'a Message,
}

/// Read-only query view over a message store
#[derive(Debug, Clone, Copy)]
pub struct MessageQuery<'a> {
    store: &'a MessageStore,
}

impl<'a> MessageQuery<'a> {
    /// Create a query view over `store`.
    pub fn new(store: &'a MessageStore) -> Self {
        Self { store }
    }

    /// The first message whose ID matches, scanning registries in
    /// `Disposition::ALL` order and each registry oldest first.
    pub fn find_by_id(&self, id: &str) -> Option<FiledMessage<'a>> {
        for disposition in Disposition::ALL {
            if let Some(message) = self
                .store
                .registry(disposition)
                .iter()
                .find(|message| message.id == id)
            {
                return Some(FiledMessage {
                    disposition,
                    message,
                });
            }
        }
        None
    }

    /// Every message addressed to `recipient`, across all registries.
    pub fn find_by_recipient(&self, recipient: &str) -> Vec<FiledMessage<'a>> {
        let mut hits = Vec::new();
        for disposition in Disposition::ALL {
            for message in self.store.registry(disposition) {
                if message.recipient == recipient {
                    hits.push(FiledMessage {
                        disposition,
                        message,
                    });
                }
            }
        }
        hits
    }

    /// The sent message with the most body characters. Ties keep the
    /// message that was filed first.
    pub fn longest_sent(&self) -> Option<&'a Message> {
        let mut longest: Option<&'a Message> = None;
        for message in self.store.sent() {
            let beats = match longest {
                Some(current) => message.body_chars() > current.body_chars(),
                None => true,
            };
            if beats {
                longest = Some(message);
            }
        }
        longest
    }

    /// Body characters summed across every registry.
    pub fn total_body_chars(&self) -> usize {
        Disposition::ALL
            .iter()
            .flat_map(|disposition| self.store.registry(*disposition))
            .map(Message::body_chars)
            .sum()
    }
}
