//! In-memory mock implementation of the sheets port.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::sheets::SheetsPort,
};

/// Port calls recorded by [`InMemorySheet`], in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCall {
    Read(String),
    Write(String),
    Append(String),
}

/// In-memory implementation of SheetsPort for testing.
///
/// Stores the sheet as plain rows, records every call for sequencing
/// assertions, and can be switched into a failing mode to simulate
/// downstream outages.
#[derive(Default)]
pub struct InMemorySheet {
    rows: Mutex<Vec<Vec<String>>>,
    calls: Mutex<Vec<SheetCall>>,
    fail_with: Mutex<Option<String>>,
}

impl InMemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the sheet with initial rows (header included) for testing.
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    /// Make every subsequent call fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Calls observed so far (for sequencing assertions).
    pub fn calls(&self) -> Vec<SheetCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Full sheet content, header row included.
    pub fn all_rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }

    fn check_failure(&self) -> AppResult<()> {
        if let Some(message) = self.fail_with.lock().unwrap().as_ref() {
            return Err(AppError::Internal(message.clone()));
        }
        Ok(())
    }

    // The waitlist only ever addresses the header row or the full sheet.
    fn is_header_range(range: &str) -> bool {
        range.ends_with("!A1:E1")
    }
}

#[async_trait]
impl SheetsPort for InMemorySheet {
    async fn read_range(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        self.calls
            .lock()
            .unwrap()
            .push(SheetCall::Read(range.to_string()));
        self.check_failure()?;

        let rows = self.rows.lock().unwrap();
        if Self::is_header_range(range) {
            Ok(rows.first().cloned().into_iter().collect())
        } else {
            Ok(rows.clone())
        }
    }

    async fn write_range(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(SheetCall::Write(range.to_string()));
        self.check_failure()?;

        let mut rows = self.rows.lock().unwrap();
        if Self::is_header_range(range) {
            let header = values.into_iter().next().unwrap_or_default();
            if rows.is_empty() {
                rows.push(header);
            } else {
                rows[0] = header;
            }
        } else {
            *rows = values;
        }
        Ok(())
    }

    async fn append_row(&self, range: &str, row: Vec<String>) -> AppResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(SheetCall::Append(range.to_string()));
        self.check_failure()?;

        self.rows.lock().unwrap().push(row);
        Ok(())
    }
}
