pub mod adapters;
pub mod application;
pub mod infra;

// Test utilities (in-memory fakes for the spreadsheet port)
#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
