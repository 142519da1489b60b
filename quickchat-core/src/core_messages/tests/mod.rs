/*
    Integration tests for the core_messages subsystem

    Test suite covering:
    - Filing messages by disposition and by action code
    - Digest-based deletion from the stored registry
    - Queries across registries (search, longest sent, totals)
    - Report rendering for the console
    - Validator and digest properties
*/

pub mod query_tests;
pub mod report_tests;
