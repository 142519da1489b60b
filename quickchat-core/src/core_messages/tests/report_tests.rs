/*
    Report integration tests - Console copy rendered from store state

    Tests:
    1. Each report names the things the console user looks for
    2. Found and not-found branches both render sensibly
    3. The full report's numbers agree with the store
*/

use crate::core_messages::{reports, Disposition, Message, MessageStore, ReportSummary};
use crate::test_utils::assertions::assert_text_contains;
use crate::test_utils::fixtures::populated_store;

#[test]
fn test_sent_roster_lists_every_sent_recipient() {
    let store = populated_store();
    let roster = reports::sent_roster(&store);

    assert_text_contains(&roster, "Sender");
    assert_text_contains(&roster, "Recipient");
    for message in store.sent() {
        assert_text_contains(&roster, &message.recipient);
    }
}

#[test]
fn test_sent_roster_on_an_empty_store() {
    let store = MessageStore::new();
    assert_text_contains(&reports::sent_roster(&store), "No messages");
}

#[test]
fn test_longest_sent_report_shows_body_and_count() {
    let store = populated_store();
    let report = reports::longest_sent_report(&store);

    assert_text_contains(&report, "Message");
    assert_text_contains(&report, "Characters");
    assert_text_contains(&report, "Did you get the cake?");
    assert_text_contains(&report, "21");
}

#[test]
fn test_search_by_id_report_found_and_missing() {
    let store = populated_store();

    let found = reports::search_by_id_report(&store, "MSG0000004");
    assert_text_contains(&found, "MSG0000004");
    assert_text_contains(&found, "stored");
    assert_text_contains(&found, "Ok, I am leaving without you.");

    let missing = reports::search_by_id_report(&store, "MSG404");
    assert_text_contains(&missing, "MSG404");
    assert_text_contains(&missing, "was found"); // "No message ... was found."
}

#[test]
fn test_recipient_report_includes_the_number_either_way() {
    let store = populated_store();

    let found = reports::recipient_report(&store, "+27718693002");
    assert_text_contains(&found, "+27718693002");
    assert_text_contains(&found, "It is dinner time !");

    let missing = reports::recipient_report(&store, "+10000000000");
    assert_text_contains(&missing, "+10000000000");
    assert_text_contains(&missing, "No messages");
}

#[test]
fn test_deletion_report_wording() {
    let mut store = populated_store();
    let digest = store.stored()[0].content_digest();

    let deleted = reports::deletion_report(&mut store, &digest);
    assert_text_contains(&deleted, "successfully deleted");

    let repeat = reports::deletion_report(&mut store, &digest);
    assert_text_contains(&repeat, "not found");
}

#[test]
fn test_full_report_numbers_match_the_store() {
    let store = populated_store();
    let report = reports::full_report(&store);

    assert_text_contains(&report, "Total messages: 5");
    assert_text_contains(&report, "Sent: 2");
    assert_text_contains(&report, "Stored: 2");
    assert_text_contains(&report, "Disregarded: 1");
    assert_text_contains(&report, "Did you get the cake?");
}

#[test]
fn test_report_summary_totals() {
    let mut store = MessageStore::new();
    store.file(Message::new("MSG1", "+27718693002", "abc"), Disposition::Sent);
    store.file(
        Message::new("MSG2", "+27718693002", "defgh"),
        Disposition::Stored,
    );

    let summary = ReportSummary::collect(&store);

    assert_eq!(summary.sent, 1);
    assert_eq!(summary.stored, 1);
    assert_eq!(summary.disregarded, 0);
    assert_eq!(summary.total_messages, 2);
    assert_eq!(summary.total_body_chars, 8);
}

#[test]
fn test_report_summary_serializes() -> anyhow::Result<()> {
    let summary = ReportSummary::collect(&populated_store());
    let json = serde_json::to_string(&summary)?;
    let back: ReportSummary = serde_json::from_str(&json)?;
    assert_eq!(summary, back);
    Ok(())
}
