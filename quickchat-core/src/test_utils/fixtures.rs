//! Test fixtures for creating common test objects
//!
//! Provides builder patterns and factory functions for creating test data.
//! `populated_store` is also what the console's developer mode uses to
//! demonstrate the app with every registry occupied.

use crate::core_account::UserAccount;
use crate::core_messages::{Disposition, Message, MessageStore};

/// Builder for creating test messages
pub struct TestMessageBuilder {
    id: String,
    recipient: String,
    body: String,
}

impl TestMessageBuilder {
    pub fn new() -> Self {
        Self {
            id: Message::generate_id(),
            recipient: "+27718693002".to_string(),
            body: "Test message".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Message {
        Message::new(self.id, self.recipient, self.body)
    }
}

impl Default for TestMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test accounts
pub struct TestAccountBuilder {
    username: String,
    password: String,
    cell_number: String,
    first_name: String,
    last_name: String,
}

impl TestAccountBuilder {
    pub fn new() -> Self {
        Self {
            username: "kyl_1".to_string(),
            password: "Ch&&sec@ke99!".to_string(),
            cell_number: "+27838968976".to_string(),
            first_name: "Kyle".to_string(),
            last_name: "Smith".to_string(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_cell_number(mut self, cell_number: impl Into<String>) -> Self {
        self.cell_number = cell_number.into();
        self
    }

    pub fn build(self) -> UserAccount {
        UserAccount::new(
            self.username,
            self.password,
            self.cell_number,
            self.first_name,
            self.last_name,
        )
    }
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Quick fixture functions for common test objects

pub fn test_message() -> Message {
    TestMessageBuilder::new().build()
}

pub fn test_account() -> UserAccount {
    TestAccountBuilder::new().build()
}

/// The fixed sample set, as (message, disposition) pairs covering every
/// registry.
pub fn sample_messages() -> Vec<(Message, Disposition)> {
    vec![
        (
            Message::new("MSG0000001", "+27834557896", "Did you get the cake?"),
            Disposition::Sent,
        ),
        (
            Message::new("MSG0000002", "+27718693002", "It is dinner time !"),
            Disposition::Sent,
        ),
        (
            Message::new(
                "MSG0000003",
                "+27838884567",
                "Where are you? You are late! I have asked you to be on time.",
            ),
            Disposition::Stored,
        ),
        (
            Message::new("MSG0000004", "+27838884567", "Ok, I am leaving without you."),
            Disposition::Stored,
        ),
        (
            Message::new("MSG0000005", "+27834484567", "Yohoooo, I am at your gate."),
            Disposition::Disregarded,
        ),
    ]
}

/// A store seeded with the fixed sample set; every registry is non-empty.
pub fn populated_store() -> MessageStore {
    let mut store = MessageStore::new();
    for (message, disposition) in sample_messages() {
        store.file(message, disposition);
    }
    store
}
