//! QuickChat core: message validation, hashing, filing and reporting,
//! plus the single-user account layer behind the console app.

pub mod core_account;
pub mod core_messages;
pub mod limits;
pub mod logging;
pub mod test_utils;

pub use core_account::{AccountError, UserAccount};
pub use core_messages::{
    Disposition, FiledMessage, Message, MessageQuery, MessageStore, ReportSummary, StoreError,
    StoreResult,
};
pub use logging::{init_logging, LogConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Ensure the main exports are accessible
        let _ = MessageStore::new();
        let _ = Disposition::Sent;
        let _ = LogConfig::default();
    }
}
