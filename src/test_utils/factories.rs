//! Builders for app state wired to test doubles.

use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::ports::sheets::SheetsPort,
    infra::config::AppConfig,
    test_utils::InMemorySheet,
    use_cases::waitlist::WaitlistUseCases,
};

pub fn test_config() -> AppConfig {
    AppConfig {
        google_client_email: "svc@test.iam.gserviceaccount.com".to_string(),
        google_private_key: SecretString::new("test-key".into()),
        google_sheet_id: "test-sheet-id".to_string(),
        sheet_tab: "Sheet1".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
    }
}

/// App state backed by the given in-memory sheet.
pub fn test_app_state(sheet: Arc<InMemorySheet>) -> AppState {
    let waitlist = WaitlistUseCases::new(sheet as Arc<dyn SheetsPort>, "Sheet1".to_string());
    AppState {
        config: Arc::new(test_config()),
        waitlist: Arc::new(waitlist),
    }
}
