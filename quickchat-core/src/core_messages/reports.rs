/*
    reports.rs - Console-facing renderings of store state

    Every report is plain text assembled from the typed queries in
    query.rs. The console prints these verbatim, so the wording here is
    user-visible copy.
*/

use crate::core_messages::query::MessageQuery;
use crate::core_messages::store::MessageStore;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Aggregate counts across the registries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Messages in the sent registry
    pub sent: usize,
    /// Messages in the stored registry
    pub stored: usize,
    /// Messages in the disregarded registry
    pub disregarded: usize,
    /// Messages across every registry
    pub total_messages: usize,
    /// Body characters across every registry
    pub total_body_chars: usize,
}

impl ReportSummary {
    /// Collect the aggregate numbers for `store`.
    pub fn collect(store: &MessageStore) -> Self {
        Self {
            sent: store.sent().len(),
            stored: store.stored().len(),
            disregarded: store.disregarded().len(),
            total_messages: store.total_messages(),
            total_body_chars: MessageQuery::new(store).total_body_chars(),
        }
    }
}

/// Sender and recipient lines for every sent message, oldest first.
pub fn sent_roster(store: &MessageStore) -> String {
    if store.sent().is_empty() {
        return "No messages have been sent yet.".to_string();
    }
    let mut out = String::from("Sent messages:\n");
    for message in store.sent() {
        let _ = writeln!(out, "Sender: you, Recipient: {}", message.recipient);
    }
    out
}

/// The longest sent message with its character count, or a placeholder
/// line when nothing has been sent.
pub fn longest_sent_report(store: &MessageStore) -> String {
    match MessageQuery::new(store).longest_sent() {
        Some(longest) => format!(
            "Longest sent message:\nMessage: {}\nCharacters: {}",
            longest.body,
            longest.body_chars()
        ),
        None => "No sent messages to measure.".to_string(),
    }
}

/// Details of the first message matching `id`, or a not-found line.
pub fn search_by_id_report(store: &MessageStore, id: &str) -> String {
    match MessageQuery::new(store).find_by_id(id) {
        Some(hit) => format!(
            "Found message {} in the {} registry.\n{}",
            id, hit.disposition, hit.message
        ),
        None => format!("No message with ID {} was found.", id),
    }
}

/// Every message addressed to `recipient`, with the registry each one
/// sits in.
pub fn recipient_report(store: &MessageStore, recipient: &str) -> String {
    let hits = MessageQuery::new(store).find_by_recipient(recipient);
    if hits.is_empty() {
        return format!("No messages found for recipient {}.", recipient);
    }
    let mut out = format!("Messages for recipient {}:\n", recipient);
    for hit in &hits {
        let _ = writeln!(out, "[{}] {}", hit.disposition, hit.message);
    }
    out
}

/// Delete the stored message matching `digest` and describe the outcome.
pub fn deletion_report(store: &mut MessageStore, digest: &str) -> String {
    match store.delete_by_digest(digest) {
        Some(removed) => format!("Message \"{}\" successfully deleted.", removed.body),
        None => "Message not found in the stored registry; nothing deleted.".to_string(),
    }
}

/// The full report: counts per registry, totals, and the longest sent
/// message.
pub fn full_report(store: &MessageStore) -> String {
    let summary = ReportSummary::collect(store);
    let mut out = String::from("Message store report\n");
    let _ = writeln!(out, "Total messages: {}", summary.total_messages);
    let _ = writeln!(out, "Sent: {}", summary.sent);
    let _ = writeln!(out, "Stored: {}", summary.stored);
    let _ = writeln!(out, "Disregarded: {}", summary.disregarded);
    let _ = writeln!(out, "Total body characters: {}", summary.total_body_chars);
    if let Some(longest) = MessageQuery::new(store).longest_sent() {
        let _ = writeln!(
            out,
            "Longest sent message ({} characters): {}",
            longest.body_chars(),
            longest.body
        );
    }
    out
}
