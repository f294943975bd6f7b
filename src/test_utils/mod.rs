//! Test utilities for integration testing.
//!
//! This module provides:
//! - An in-memory spreadsheet fake for mocking the sheets port
//! - Helper builders for constructing app state with test dependencies

mod factories;
mod sheets_mocks;

pub use factories::*;
pub use sheets_mocks::*;
