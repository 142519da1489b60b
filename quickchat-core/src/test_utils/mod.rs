//! Test utilities and helpers for QuickChat
//!
//! This module provides common testing utilities, fixtures, and helper
//! functions to improve test quality and reduce duplication across the
//! codebase.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
