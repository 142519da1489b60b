/*
    message.rs - Message record

    A single chat message addressed to one recipient. Fields are kept
    exactly as the caller supplied them; validity is a question you ask
    (id_within_limit, body_within_limit, recipient_digit_count), never a
    construction failure. The content digest is derived from the body on
    demand and is therefore always in sync with it.
*/

use crate::core_account::validation;
use crate::limits;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// A chat message and the recipient it is addressed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Caller-supplied identifier, at most ten characters when valid
    pub id: String,
    /// International cell number of the receiving party
    pub recipient: String,
    /// Message text, at most 250 characters when valid
    pub body: String,
}

impl Message {
    /// Create a message from caller-supplied fields.
    pub fn new(id: impl Into<String>, recipient: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            recipient: recipient.into(),
            body: body.into(),
        }
    }

    /// Generate a fresh random identifier that passes `valid_id`.
    pub fn generate_id() -> String {
        let raw = Uuid::new_v4().simple().to_string();
        raw[..limits::MAX_MESSAGE_ID_CHARS].to_ascii_uppercase()
    }

    /// True when `id` fits the identifier limit.
    pub fn valid_id(id: &str) -> bool {
        id.chars().count() <= limits::MAX_MESSAGE_ID_CHARS
    }

    /// True when `body` fits the message length limit.
    pub fn valid_body(body: &str) -> bool {
        body.chars().count() <= limits::MAX_MESSAGE_BODY_CHARS
    }

    /// True when this message's identifier fits the limit.
    pub fn id_within_limit(&self) -> bool {
        Self::valid_id(&self.id)
    }

    /// True when this message's body fits the length limit.
    pub fn body_within_limit(&self) -> bool {
        Self::valid_body(&self.body)
    }

    /// Character count of the body. Limits and reports count characters,
    /// not bytes.
    pub fn body_chars(&self) -> usize {
        self.body.chars().count()
    }

    /// Digit count of the recipient number, or zero when the number is
    /// not a plausible international cell number.
    pub fn recipient_digit_count(&self) -> usize {
        validation::msisdn_digits(&self.recipient)
    }

    /// SHA-256 of the body, rendered as 64 uppercase hex characters.
    ///
    /// The digest depends on the body alone, so equal bodies always hash
    /// alike regardless of id or recipient.
    pub fn content_digest(&self) -> String {
        let digest = Sha256::digest(self.body.as_bytes());
        hex::encode_upper(digest)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recipient: {} | Message: {}", self.recipient, self.body)
    }
}
