use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    use_cases::waitlist::{NewSignup, WaitlistEntry},
};

// Fields default so an absent key reaches validation as an empty value
// instead of bouncing off the JSON extractor.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct JoinPayload {
    full_name: String,
    email: String,
    user_role: String,
    service_category: Option<String>,
}

impl From<JoinPayload> for NewSignup {
    fn from(payload: JoinPayload) -> Self {
        NewSignup {
            full_name: payload.full_name,
            email: payload.email,
            user_role: payload.user_role,
            service_category: payload.service_category,
        }
    }
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    message: &'static str,
    data: WaitlistEntry,
}

#[derive(Serialize)]
struct ListResponse {
    success: bool,
    data: Vec<WaitlistEntry>,
    count: usize,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", get(list).post(join))
}

async fn join(
    State(app_state): State<AppState>,
    Json(payload): Json<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    let entry = app_state.waitlist.join(payload.into()).await?;
    Ok(Json(JoinResponse {
        success: true,
        message: "Successfully added to waitlist",
        data: entry,
    }))
}

async fn list(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = app_state.waitlist.list().await?;
    Ok(Json(ListResponse {
        success: true,
        count: entries.len(),
        data: entries,
    }))
}
