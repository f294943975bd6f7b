use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::sheets::SheetsPort,
    validators::is_present,
};

/// Role that makes `service_category` mandatory.
pub const ROLE_PROVIDER: &str = "provider";

/// Column headers of the waitlist sheet, row 1, columns A-E.
pub const HEADER_ROW: [&str; 5] = [
    "Full Name",
    "Email",
    "User Role",
    "Service Category",
    "Date Joined",
];

/// One signup as submitted to the API. `user_role` is a free string here;
/// the closed customer/provider set is a client-side concern.
#[derive(Debug, Clone, Default)]
pub struct NewSignup {
    pub full_name: String,
    pub email: String,
    pub user_role: String,
    pub service_category: Option<String>,
}

/// One persisted waitlist row. Always five fields, in sheet column order;
/// `service_category` is the empty string for non-providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub full_name: String,
    pub email: String,
    pub user_role: String,
    pub service_category: String,
    pub date_joined: String,
}

impl WaitlistEntry {
    pub fn as_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.email.clone(),
            self.user_role.clone(),
            self.service_category.clone(),
            self.date_joined.clone(),
        ]
    }

    /// Build an entry from a sheet row, defaulting missing cells to "".
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        Self {
            full_name: cell(0),
            email: cell(1),
            user_role: cell(2),
            service_category: cell(3),
            date_joined: cell(4),
        }
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    sheets: Arc<dyn SheetsPort>,
    sheet_tab: String,
}

impl WaitlistUseCases {
    pub fn new(sheets: Arc<dyn SheetsPort>, sheet_tab: String) -> Self {
        Self { sheets, sheet_tab }
    }

    /// Validate a signup and append it to the sheet, creating the header
    /// row first if the sheet has never been written. Returns the entry as
    /// persisted, including the computed join date.
    #[instrument(skip(self))]
    pub async fn join(&self, signup: NewSignup) -> AppResult<WaitlistEntry> {
        validate(&signup)?;

        // Category is only meaningful for providers; everyone else gets "".
        let service_category = if signup.user_role == ROLE_PROVIDER {
            signup.service_category.unwrap_or_default()
        } else {
            String::new()
        };

        let entry = WaitlistEntry {
            full_name: signup.full_name,
            email: signup.email,
            user_role: signup.user_role,
            service_category,
            date_joined: Utc::now().format("%Y-%m-%d").to_string(),
        };

        self.persist(&entry)
            .await
            .map_err(|e| e.during("Failed to add to waitlist"))?;

        Ok(entry)
    }

    /// All persisted entries, header row excluded, in sheet order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        let rows = self
            .sheets
            .read_range(&self.data_range())
            .await
            .map_err(|e| e.during("Failed to fetch waitlist data"))?;

        Ok(rows
            .iter()
            .skip(1)
            .map(|row| WaitlistEntry::from_row(row))
            .collect())
    }

    // The header check and the append are not synchronized: two concurrent
    // first-ever submissions may both write the (fixed) header row.
    async fn persist(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let header = self.sheets.read_range(&self.header_range()).await?;
        if header.is_empty() {
            let labels = HEADER_ROW.iter().map(|s| s.to_string()).collect();
            self.sheets
                .write_range(&self.header_range(), vec![labels])
                .await?;
        }
        self.sheets
            .append_row(&self.data_range(), entry.as_row())
            .await
    }

    fn header_range(&self) -> String {
        format!("{}!A1:E1", self.sheet_tab)
    }

    fn data_range(&self) -> String {
        format!("{}!A:E", self.sheet_tab)
    }
}

fn validate(signup: &NewSignup) -> AppResult<()> {
    if !is_present(&signup.full_name)
        || !is_present(&signup.email)
        || !is_present(&signup.user_role)
    {
        return Err(AppError::InvalidInput("Missing required fields".into()));
    }
    if signup.user_role == ROLE_PROVIDER
        && !signup.service_category.as_deref().is_some_and(is_present)
    {
        return Err(AppError::InvalidInput(
            "Service category is required for providers".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemorySheet, SheetCall};

    fn use_cases(sheet: Arc<InMemorySheet>) -> WaitlistUseCases {
        WaitlistUseCases::new(sheet as Arc<dyn SheetsPort>, "Sheet1".to_string())
    }

    fn customer_signup() -> NewSignup {
        NewSignup {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            user_role: "customer".to_string(),
            service_category: None,
        }
    }

    #[tokio::test]
    async fn rejects_missing_fields_without_touching_the_sheet() {
        let sheet = Arc::new(InMemorySheet::new());
        let waitlist = use_cases(sheet.clone());

        let mut signup = customer_signup();
        signup.email = String::new();

        let err = waitlist.join(signup).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "Missing required fields"));
        assert!(sheet.calls().is_empty());
    }

    #[tokio::test]
    async fn rejects_provider_without_category_without_touching_the_sheet() {
        let sheet = Arc::new(InMemorySheet::new());
        let waitlist = use_cases(sheet.clone());

        let signup = NewSignup {
            full_name: "Sam".to_string(),
            email: "sam@x.com".to_string(),
            user_role: "provider".to_string(),
            service_category: None,
        };

        let err = waitlist.join(signup).await.unwrap_err();
        assert!(
            matches!(err, AppError::InvalidInput(msg) if msg == "Service category is required for providers")
        );
        assert!(sheet.calls().is_empty());
    }

    #[tokio::test]
    async fn first_join_writes_header_before_appending() {
        let sheet = Arc::new(InMemorySheet::new());
        let waitlist = use_cases(sheet.clone());

        waitlist.join(customer_signup()).await.unwrap();

        assert_eq!(
            sheet.calls(),
            vec![
                SheetCall::Read("Sheet1!A1:E1".to_string()),
                SheetCall::Write("Sheet1!A1:E1".to_string()),
                SheetCall::Append("Sheet1!A:E".to_string()),
            ]
        );
        let rows = sheet.all_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], HEADER_ROW.map(String::from).to_vec());
    }

    #[tokio::test]
    async fn second_join_does_not_rewrite_the_header() {
        let sheet = Arc::new(InMemorySheet::new());
        let waitlist = use_cases(sheet.clone());

        waitlist.join(customer_signup()).await.unwrap();
        waitlist.join(customer_signup()).await.unwrap();

        let writes = sheet
            .calls()
            .into_iter()
            .filter(|c| matches!(c, SheetCall::Write(_)))
            .count();
        assert_eq!(writes, 1);
        assert_eq!(sheet.all_rows().len(), 3);
    }

    #[tokio::test]
    async fn customer_category_is_stored_empty_regardless_of_input() {
        let sheet = Arc::new(InMemorySheet::new());
        let waitlist = use_cases(sheet.clone());

        let mut signup = customer_signup();
        signup.service_category = Some("Plumbing".to_string());

        let entry = waitlist.join(signup).await.unwrap();
        assert_eq!(entry.service_category, "");
        assert_eq!(sheet.all_rows()[1][3], "");
    }

    #[tokio::test]
    async fn provider_category_is_persisted() {
        let sheet = Arc::new(InMemorySheet::new());
        let waitlist = use_cases(sheet.clone());

        let signup = NewSignup {
            full_name: "Sam".to_string(),
            email: "sam@x.com".to_string(),
            user_role: "provider".to_string(),
            service_category: Some("Plumbing".to_string()),
        };

        let entry = waitlist.join(signup).await.unwrap();
        assert_eq!(entry.service_category, "Plumbing");

        let row = &sheet.all_rows()[1];
        assert_eq!(row.len(), 5);
        assert_eq!(row[..4], ["Sam", "sam@x.com", "provider", "Plumbing"]);
    }

    #[tokio::test]
    async fn list_skips_header_and_defaults_missing_cells() {
        let sheet = Arc::new(InMemorySheet::with_rows(vec![
            HEADER_ROW.map(String::from).to_vec(),
            vec!["Jane".to_string(), "jane@x.com".to_string()],
        ]));
        let waitlist = use_cases(sheet);

        let entries = waitlist.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].full_name, "Jane");
        assert_eq!(entries[0].user_role, "");
        assert_eq!(entries[0].date_joined, "");
    }

    #[tokio::test]
    async fn downstream_failure_carries_the_operation_and_message() {
        let sheet = Arc::new(InMemorySheet::new());
        sheet.fail_with("invalid_grant");
        let waitlist = use_cases(sheet);

        let err = waitlist.join(customer_signup()).await.unwrap_err();
        match err {
            AppError::Downstream { action, message } => {
                assert_eq!(action, "Failed to add to waitlist");
                assert_eq!(message, "invalid_grant");
            }
            other => panic!("expected downstream error, got {other:?}"),
        }
    }
}
