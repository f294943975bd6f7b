use std::sync::Arc;

use axum::extract::FromRef;

use crate::{infra::config::AppConfig, use_cases::waitlist::WaitlistUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist: Arc<WaitlistUseCases>,
}

impl FromRef<AppState> for Arc<WaitlistUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.waitlist.clone()
    }
}
