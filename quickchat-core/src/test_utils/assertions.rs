//! Custom assertions and matchers for tests
//!
//! Provides expressive assertion helpers that improve test readability
//! and provide better error messages.

use std::fmt::Debug;

/// Assert that a Result is Ok and return the value
pub fn assert_ok<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok, got Err: {:?}", e),
    }
}

/// Assert that a Result is Err and return the error
pub fn assert_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
        Err(e) => e,
    }
}

/// Assert that an Option is Some and return the value
pub fn assert_some<T>(option: Option<T>) -> T {
    match option {
        Some(value) => value,
        None => panic!("Expected Some, got None"),
    }
}

/// Assert that an Option is None
pub fn assert_none<T: Debug>(option: Option<T>) {
    if let Some(value) = option {
        panic!("Expected None, got Some({:?})", value);
    }
}

/// Assert that rendered text contains a fragment, with the full text in
/// the failure message
pub fn assert_text_contains(text: &str, fragment: &str) {
    if !text.contains(fragment) {
        panic!(
            "Expected text to contain {:?}, but it didn't. Text: {:?}",
            fragment, text
        );
    }
}
