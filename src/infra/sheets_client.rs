use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::sheets::SheetsPort,
    infra::google_auth::GoogleAuthenticator,
};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Sheets v4 values API, scoped to one spreadsheet.
#[derive(Clone)]
pub struct GoogleSheetsClient {
    client: reqwest::Client,
    auth: Arc<GoogleAuthenticator>,
    spreadsheet_id: String,
}

#[derive(Serialize)]
struct ValueRange<'a> {
    values: &'a [Vec<String>],
}

#[derive(Deserialize)]
struct ValuesResponse {
    // Absent entirely when the range has never been written.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetsClient {
    pub fn new(
        client: reqwest::Client,
        auth: Arc<GoogleAuthenticator>,
        spreadsheet_id: String,
    ) -> Self {
        Self {
            client,
            auth,
            spreadsheet_id,
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!("{}/{}/values/{}", SHEETS_API_BASE, self.spreadsheet_id, range)
    }

    async fn checked(response: reqwest::Response) -> AppResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Internal(format!(
            "Sheets API returned {}: {}",
            status, body
        )))
    }
}

#[async_trait]
impl SheetsPort for GoogleSheetsClient {
    async fn read_range(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let token = self.auth.access_token().await?;
        let response = self
            .client
            .get(self.values_url(range))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Sheets request failed: {}", e)))?;

        let parsed: ValuesResponse = Self::checked(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(parsed.values)
    }

    async fn write_range(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<()> {
        let token = self.auth.access_token().await?;
        let response = self
            .client
            .put(self.values_url(range))
            .bearer_auth(token)
            .query(&[("valueInputOption", "RAW")])
            .json(&ValueRange { values: &values })
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Sheets request failed: {}", e)))?;

        Self::checked(response).await?;
        Ok(())
    }

    async fn append_row(&self, range: &str, row: Vec<String>) -> AppResult<()> {
        let token = self.auth.access_token().await?;
        let values = vec![row];
        let response = self
            .client
            .post(format!("{}:append", self.values_url(range)))
            .bearer_auth(token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&ValueRange { values: &values })
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Sheets request failed: {}", e)))?;

        Self::checked(response).await?;
        Ok(())
    }
}
