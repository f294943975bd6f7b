//! The signup modal as a headless state machine.

use serde::Serialize;
use thiserror::Error;

/// Survey the landing page opens in a new tab. Opening a browser is the
/// caller's business; the URL lives here so it has one home.
pub const SURVEY_URL: &str = "https://forms.gle/AepYKp6ZBUqvphDGA";

/// The closed role set offered by the signup form's select list. The
/// backend accepts any non-empty role string; this restriction is purely
/// a form concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Provider,
}

/// What the user has typed so far. Values survive a failed submission so
/// a retry does not start from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub user_role: Option<UserRole>,
    pub service_category: String,
}

impl FormFields {
    fn to_request(&self) -> Result<SignupRequest, SubmitBlocked> {
        let user_role = match self.user_role {
            Some(role)
                if !self.full_name.trim().is_empty() && !self.email.trim().is_empty() =>
            {
                role
            }
            _ => return Err(SubmitBlocked::MissingFields),
        };
        if user_role == UserRole::Provider && self.service_category.trim().is_empty() {
            return Err(SubmitBlocked::MissingCategory);
        }
        Ok(SignupRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            user_role,
            service_category: self.service_category.clone(),
        })
    }
}

/// Wire payload for `POST /api/waitlist`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub user_role: UserRole,
    pub service_category: String,
}

/// Why a submit attempt did not start. The form stays in its current
/// phase; nothing goes over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("Required fields are missing")]
    MissingFields,

    #[error("Service category is required for providers")]
    MissingCategory,

    /// Already submitting, already submitted, or modal not open.
    #[error("Form is not accepting a submission")]
    NotOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// Modal not shown yet.
    Idle,
    /// Collecting input; carries the previous attempt's error, if any.
    ModalOpen { error: Option<String> },
    /// Request in flight; the submit control is disabled.
    Submitting,
    /// Terminal success.
    Submitted,
}

/// The signup modal's lifecycle.
///
/// `Idle -> ModalOpen -> Submitting -> Submitted`, with a failed
/// submission dropping back to `ModalOpen` (error retained, fields
/// preserved). There is no cancellation of an in-flight submission.
#[derive(Debug)]
pub struct SignupForm {
    pub fields: FormFields,
    phase: FormPhase,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Show the modal. Re-opening clears a stale error but keeps input.
    pub fn open_modal(&mut self) {
        if matches!(self.phase, FormPhase::Idle | FormPhase::ModalOpen { .. }) {
            self.phase = FormPhase::ModalOpen { error: None };
        }
    }

    /// Dismiss the modal without submitting. Input is kept.
    pub fn close_modal(&mut self) {
        if matches!(self.phase, FormPhase::ModalOpen { .. }) {
            self.phase = FormPhase::Idle;
        }
    }

    /// Guarded `ModalOpen -> Submitting` transition. On success returns
    /// the payload to send; on refusal the phase is unchanged.
    pub fn begin_submit(&mut self) -> Result<SignupRequest, SubmitBlocked> {
        if !matches!(self.phase, FormPhase::ModalOpen { .. }) {
            return Err(SubmitBlocked::NotOpen);
        }
        let request = self.fields.to_request()?;
        self.phase = FormPhase::Submitting;
        Ok(request)
    }

    /// `Submitting -> Submitted`: modal closes, input is cleared.
    pub fn submit_succeeded(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.fields = FormFields::default();
            self.phase = FormPhase::Submitted;
        }
    }

    /// `Submitting -> ModalOpen` with the error surfaced and input kept
    /// so the user can retry.
    pub fn submit_failed(&mut self, error: impl Into<String>) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::ModalOpen {
                error: Some(error.into()),
            };
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
