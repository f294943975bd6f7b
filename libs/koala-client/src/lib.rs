//! Client-side signup flow for the Koala waitlist.
//!
//! This crate models the landing page's signup modal as a headless state
//! machine and ships an HTTP client for the waitlist endpoint.
//!
//! # Features
//!
//! - **Form flow** - the modal's open/submit/retry lifecycle as a typed
//!   state machine, with the same guard rules the backend enforces
//! - **Waitlist client** - `POST /api/waitlist` with envelope handling
//!   (behind the `client` feature)
//!
//! # Example
//!
//! ```rust,ignore
//! use koala_client::{SignupForm, UserRole, WaitlistClient, WaitlistConfig};
//!
//! let client = WaitlistClient::new(WaitlistConfig {
//!     base_url: "https://koala.example.com".to_string(),
//! })?;
//!
//! let mut form = SignupForm::new();
//! form.open_modal();
//! form.fields.full_name = "Jane Doe".to_string();
//! form.fields.email = "jane@x.com".to_string();
//! form.fields.user_role = Some(UserRole::Customer);
//!
//! client.submit_form(&mut form).await?;
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
mod form;

#[cfg(feature = "client")]
pub use client::{JoinConfirmation, WaitlistClient, WaitlistConfig};
pub use error::WaitlistError;
pub use form::{
    FormFields, FormPhase, SURVEY_URL, SignupForm, SignupRequest, SubmitBlocked, UserRole,
};
