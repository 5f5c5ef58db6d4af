use std::fmt;
use std::time::Duration;

use shared_types::{validate_new_password, MessageResponse, ResetPasswordRequest};

use super::{FormStore, Ticket, Tickets};
use crate::api::AuthApi;
use crate::error::ApiError;
use crate::schedule::{Clock, Fired, ViewScope};

pub const SUCCESS_MESSAGE: &str = "Password reset successful.";
pub const FAILURE_MESSAGE: &str = "Failed to reset password. The link may have expired.";

/// Where the confirmation page is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmResetStatus {
    /// No token in the URL. Terminal.
    InvalidLink,
    Editing {
        error: Option<String>,
    },
    Submitting,
    /// Terminal; the page redirects to the login view.
    Succeeded {
        message: String,
    },
}

/// A reset that passed validation and must now be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReset {
    pub ticket: Ticket,
    pub request: ResetPasswordRequest,
}

/// State of the "set new password" page.
#[derive(Clone)]
pub struct ConfirmResetForm {
    token: Option<String>,
    pub password: String,
    pub confirm_password: String,
    status: ConfirmResetStatus,
    tickets: Tickets,
}

impl fmt::Debug for ConfirmResetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmResetForm")
            .field("has_token", &self.token.is_some())
            .field("status", &self.status)
            .field("tickets", &self.tickets)
            .finish_non_exhaustive()
    }
}

impl ConfirmResetForm {
    /// Build the form from the `token` query parameter. A missing or blank
    /// token puts the form in [`ConfirmResetStatus::InvalidLink`] for good.
    pub fn new(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        let status = if token.is_some() {
            ConfirmResetStatus::Editing { error: None }
        } else {
            ConfirmResetStatus::InvalidLink
        };
        Self {
            token,
            password: String::new(),
            confirm_password: String::new(),
            status,
            tickets: Tickets::default(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn status(&self) -> &ConfirmResetStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, ConfirmResetStatus::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ConfirmResetStatus::Editing { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Validate and accept a submit. Only an editing form with a token
    /// produces a request; a validation failure is recorded as the error.
    pub fn begin_submit(&mut self) -> Option<PendingReset> {
        let token = match (&self.status, &self.token) {
            (ConfirmResetStatus::Editing { .. }, Some(token)) => token.clone(),
            _ => {
                tracing::debug!(status = ?self.status, "ignoring password reset submit");
                return None;
            }
        };

        if let Err(e) = validate_new_password(&self.password, &self.confirm_password) {
            self.status = ConfirmResetStatus::Editing {
                error: Some(e.to_string()),
            };
            return None;
        }

        let ticket = self.tickets.issue();
        self.status = ConfirmResetStatus::Submitting;
        Some(PendingReset {
            ticket,
            request: ResetPasswordRequest {
                token,
                new_password: self.password.clone(),
            },
        })
    }

    /// Apply the outcome of the reset identified by `ticket`. Returns `true`
    /// only when this call moved the form to `Succeeded`, i.e. when the
    /// caller must schedule the redirect.
    pub fn settle(&mut self, ticket: Ticket, result: Result<MessageResponse, ApiError>) -> bool {
        if !self.tickets.take(ticket) {
            tracing::debug!(ticket, "dropping stale password reset response");
            return false;
        }

        match result {
            Ok(response) => {
                self.password.clear();
                self.confirm_password.clear();
                self.status = ConfirmResetStatus::Succeeded {
                    message: response
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| SUCCESS_MESSAGE.to_string()),
                };
                true
            }
            Err(e) => {
                self.status = ConfirmResetStatus::Editing {
                    error: Some(e.user_message(FAILURE_MESSAGE)),
                };
                false
            }
        }
    }
}

/// Submit the form held in `form` through `api`. Returns `true` when the
/// password was reset and the redirect to the login view is due.
pub async fn submit<A, S>(api: &A, form: &S) -> bool
where
    A: AuthApi,
    S: FormStore<ConfirmResetForm>,
{
    let Some(pending) = form.update(ConfirmResetForm::begin_submit) else {
        return false;
    };

    let result = api.reset_password(pending.request).await;
    match &result {
        Ok(_) => tracing::info!("password reset completed"),
        Err(e) => tracing::warn!(error = %e, "password reset failed"),
    }
    form.update(|f| f.settle(pending.ticket, result))
}

/// Submit the form, then run `navigate` once `delay` has passed, unless
/// `scope` closes first. Returns `None` when the reset did not succeed and
/// nothing was scheduled.
pub async fn submit_then_redirect<A, S, C, F>(
    api: &A,
    form: &S,
    scope: &ViewScope,
    clock: &C,
    delay: Duration,
    navigate: F,
) -> Option<Fired>
where
    A: AuthApi,
    S: FormStore<ConfirmResetForm>,
    C: Clock,
    F: FnOnce(),
{
    if !submit(api, form).await {
        return None;
    }
    let fired = scope.run_after(clock, delay, navigate).await;
    tracing::debug!(?fired, "login redirect settled");
    Some(fired)
}
