/*
    Query integration tests - Searches over the populated registries

    Tests:
    1. Search by ID scans sent, then disregarded, then stored
    2. Search by recipient collects hits from every registry
    3. Longest sent message respects the strict-greater tie rule
    4. Character totals count characters, not bytes
*/

use crate::core_messages::{Disposition, Message, MessageQuery, MessageStore};
use crate::test_utils::assertions::assert_some;
use crate::test_utils::fixtures::populated_store;

#[test]
fn test_find_by_id_on_the_sample_set() {
    let store = populated_store();
    let query = MessageQuery::new(&store);

    let hit = assert_some(query.find_by_id("MSG0000003"));
    assert_eq!(hit.disposition, Disposition::Stored);
    assert!(hit.message.body.starts_with("Where are you?"));

    assert!(query.find_by_id("NO_SUCH_ID").is_none());
}

#[test]
fn test_find_by_id_prefers_sent_over_stored() {
    let mut store = MessageStore::new();
    store.file(
        Message::new("MSG1", "+27718693002", "stored first"),
        Disposition::Stored,
    );
    store.file(
        Message::new("MSG1", "+27718693002", "sent second"),
        Disposition::Sent,
    );

    let hit = assert_some(MessageQuery::new(&store).find_by_id("MSG1"));
    assert_eq!(hit.disposition, Disposition::Sent);
    assert_eq!(hit.message.body, "sent second");
}

#[test]
fn test_find_by_recipient_spans_every_registry() {
    let mut store = MessageStore::new();
    let recipient = "+27718693002";
    store.file(Message::new("MSG1", recipient, "a"), Disposition::Sent);
    store.file(Message::new("MSG2", recipient, "b"), Disposition::Stored);
    store.file(Message::new("MSG3", recipient, "c"), Disposition::Disregarded);
    store.file(
        Message::new("MSG4", "+447911123456", "unrelated"),
        Disposition::Sent,
    );

    let hits = MessageQuery::new(&store).find_by_recipient(recipient);

    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|hit| hit.message.recipient == recipient));
}

#[test]
fn test_find_by_recipient_misses_cleanly() {
    let store = populated_store();
    let hits = MessageQuery::new(&store).find_by_recipient("+10000000000");
    assert!(hits.is_empty());
}

#[test]
fn test_longest_sent_on_the_sample_set() {
    let store = populated_store();

    // The stored registry holds a longer message; only sent ones count.
    let longest = assert_some(MessageQuery::new(&store).longest_sent());
    assert_eq!(longest.body, "Did you get the cake?");
}

#[test]
fn test_longest_sent_counts_characters_not_bytes() {
    let mut store = MessageStore::new();
    // Five characters, ten bytes
    store.file(
        Message::new("MSG1", "+27718693002", "ööööö"),
        Disposition::Sent,
    );
    // Six characters, six bytes
    store.file(
        Message::new("MSG2", "+27718693002", "abcdef"),
        Disposition::Sent,
    );

    let longest = assert_some(MessageQuery::new(&store).longest_sent());
    assert_eq!(longest.id, "MSG2");
}

#[test]
fn test_total_body_chars_sums_all_registries() {
    let mut store = MessageStore::new();
    store.file(Message::new("MSG1", "+27718693002", "ab"), Disposition::Sent);
    store.file(
        Message::new("MSG2", "+27718693002", "cde"),
        Disposition::Stored,
    );
    store.file(
        Message::new("MSG3", "+27718693002", "f"),
        Disposition::Disregarded,
    );

    assert_eq!(MessageQuery::new(&store).total_body_chars(), 6);
}
