//! Field limits for messages and account credentials.
//!
//! Every validator in the crate reads its bounds from here so the rules
//! stay consistent between the message layer and the account layer.

// === Messages ===

/// Maximum characters in a caller-supplied message ID.
pub const MAX_MESSAGE_ID_CHARS: usize = 10;

/// Maximum characters in a message body.
pub const MAX_MESSAGE_BODY_CHARS: usize = 250;

/// Hex characters in a message content digest (SHA-256).
pub const DIGEST_HEX_CHARS: usize = 64;

// === Credentials ===

/// Maximum characters in a username, underscore included.
pub const MAX_USERNAME_CHARS: usize = 6;

/// Minimum characters in a password.
pub const MIN_PASSWORD_CHARS: usize = 8;

// === Cell numbers ===

/// Minimum digits after the `+` prefix (country code plus subscriber number).
pub const MIN_MSISDN_DIGITS: usize = 11;

/// Maximum digits after the `+` prefix (E.164 ceiling).
pub const MAX_MSISDN_DIGITS: usize = 15;
