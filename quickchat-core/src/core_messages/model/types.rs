/*
    types.rs - Common types for the message layer

    Defines:
    - Disposition: which registry a message is filed into
    - The mapping between dispositions and console action codes
*/

use crate::core_messages::errors::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which registry a message lands in when the user acts on it.
///
/// The console historically collected an integer action code from the
/// user; `from_action_code` is the only place that mapping lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// Delivered to the recipient (action code 1)
    Sent,
    /// Thrown away without sending (action code 2)
    Disregarded,
    /// Kept to send later (action code 3)
    Stored,
}

impl Disposition {
    /// Every disposition, in registry scan order.
    pub const ALL: [Disposition; 3] = [
        Disposition::Sent,
        Disposition::Disregarded,
        Disposition::Stored,
    ];

    /// Map a console action code to a disposition.
    ///
    /// Codes outside 1..=3 are an explicit error, never a silent default.
    pub fn from_action_code(code: u8) -> StoreResult<Self> {
        match code {
            1 => Ok(Disposition::Sent),
            2 => Ok(Disposition::Disregarded),
            3 => Ok(Disposition::Stored),
            other => Err(StoreError::UnknownActionCode(other)),
        }
    }

    /// The console action code for this disposition.
    pub fn action_code(&self) -> u8 {
        match self {
            Disposition::Sent => 1,
            Disposition::Disregarded => 2,
            Disposition::Stored => 3,
        }
    }

    /// Registry label used in reports and log events.
    pub fn label(&self) -> &'static str {
        match self {
            Disposition::Sent => "sent",
            Disposition::Disregarded => "disregarded",
            Disposition::Stored => "stored",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
