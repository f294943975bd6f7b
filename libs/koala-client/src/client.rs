//! HTTP client for the waitlist endpoint.

use serde::Deserialize;

use crate::error::WaitlistError;
use crate::form::{SignupForm, SignupRequest};

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistConfig {
    /// Base URL of the API (e.g. "https://koala.example.com")
    pub base_url: String,
}

/// Client for `POST /api/waitlist`.
pub struct WaitlistClient {
    config: WaitlistConfig,
    http_client: reqwest::Client,
}

/// The accepted entry echoed back by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinConfirmation {
    pub full_name: String,
    pub email: String,
    pub user_role: String,
    pub service_category: String,
    /// Join date as computed by the server, `YYYY-MM-DD`.
    pub date_joined: String,
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<JoinConfirmation>,
}

impl WaitlistClient {
    pub fn new(config: WaitlistConfig) -> Result<Self, WaitlistError> {
        if config.base_url.is_empty() {
            return Err(WaitlistError::Config("base_url is required".into()));
        }
        Ok(Self {
            config,
            http_client: reqwest::Client::new(),
        })
    }

    /// Submit one signup. A `success:false` envelope of any status code
    /// comes back as [`WaitlistError::Rejected`] with the backend's error
    /// string.
    pub async fn join(&self, signup: &SignupRequest) -> Result<JoinConfirmation, WaitlistError> {
        let url = format!(
            "{}/api/waitlist",
            self.config.base_url.trim_end_matches('/')
        );
        let envelope: Envelope = self
            .http_client
            .post(url)
            .json(signup)
            .send()
            .await?
            .json()
            .await?;

        if envelope.success {
            envelope
                .data
                .ok_or_else(|| WaitlistError::Rejected("Response carried no entry".into()))
        } else {
            Err(WaitlistError::Rejected(
                envelope.error.unwrap_or_else(|| "Unknown error".into()),
            ))
        }
    }

    /// Drive one submit attempt for a form: guard, send, settle.
    ///
    /// On success the form ends up `Submitted`; on a rejected or failed
    /// request it reopens with the error retained and input preserved.
    pub async fn submit_form(&self, form: &mut SignupForm) -> Result<(), WaitlistError> {
        let request = form.begin_submit()?;
        match self.join(&request).await {
            Ok(_) => {
                form.submit_succeeded();
                Ok(())
            }
            Err(err) => {
                form.submit_failed(err.to_string());
                Err(err)
            }
        }
    }
}
