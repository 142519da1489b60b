/*
    Model subsystem - Data structures for the message layer
*/

pub mod message;
pub mod types;

pub use message::*;
pub use types::*;
