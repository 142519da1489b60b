/*
    core_messages - Message records, registries, and reporting

    The in-memory message layer for QuickChat. Handles:
    - The Message record and its SHA-256 content digest
    - Filing messages into the sent / stored / disregarded registries
    - Read-only queries (search by id or recipient, longest sent, totals)
    - Plain-text reports for the console
*/

pub mod errors;
pub mod model;
pub mod query;
pub mod reports;
pub mod store;

#[cfg(test)]
mod tests;

pub use errors::{StoreError, StoreResult};
pub use model::{Disposition, Message};
pub use query::{FiledMessage, MessageQuery};
pub use reports::ReportSummary;
pub use store::MessageStore;
