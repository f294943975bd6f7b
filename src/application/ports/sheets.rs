use async_trait::async_trait;

use crate::app_error::AppResult;

/// Spreadsheet port - abstracts the external sheet the waitlist is stored in.
///
/// This trait defines the three value operations the waitlist needs. Ranges
/// use A1 notation (e.g. `Sheet1!A1:E1`); rows are plain cell strings.
#[async_trait]
pub trait SheetsPort: Send + Sync {
    /// Read all populated rows in the given range. An untouched range
    /// returns an empty vec, not an error.
    async fn read_range(&self, range: &str) -> AppResult<Vec<Vec<String>>>;

    /// Overwrite the given range with the given rows.
    async fn write_range(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<()>;

    /// Append one row after the last populated row of the given range.
    async fn append_row(&self, range: &str, row: Vec<String>) -> AppResult<()>;
}
