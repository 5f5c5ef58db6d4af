use shared_types::{ForgotPasswordRequest, ForgotPasswordResponse};

use super::{FormStore, Ticket, Tickets};
use crate::api::AuthApi;
use crate::error::ApiError;

pub const SENT_MESSAGE: &str =
    "If an account with that email exists, a password reset link has been sent.";
pub const FAILURE_MESSAGE: &str = "Failed to send reset email. Please try again.";
pub const BLANK_EMAIL_MESSAGE: &str = "Please enter your email address.";

/// Where the request page is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestResetStatus {
    #[default]
    Idle,
    /// Idle, showing the error from the last attempt.
    Failed(String),
    Sending,
    Sent {
        message: String,
        reset_link: Option<String>,
    },
}

/// A request that `begin_submit` accepted and that must now be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub request: ForgotPasswordRequest,
}

/// State of the "forgot password" page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestResetForm {
    email: String,
    status: RequestResetStatus,
    dev_reset_links: bool,
    tickets: Tickets,
}

impl RequestResetForm {
    /// `dev_reset_links` decides whether a reset link returned by the
    /// backend is kept for display.
    pub fn new(dev_reset_links: bool) -> Self {
        Self {
            dev_reset_links,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn status(&self) -> &RequestResetStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, RequestResetStatus::Sending)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestResetStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Accept a submit. Returns `None` while a request is in flight, after
    /// the link was sent, or when the email is blank.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if matches!(
            self.status,
            RequestResetStatus::Sending | RequestResetStatus::Sent { .. }
        ) {
            tracing::debug!(status = ?self.status, "ignoring reset request submit");
            return None;
        }

        let email = self.email.trim();
        if email.is_empty() {
            self.status = RequestResetStatus::Failed(BLANK_EMAIL_MESSAGE.to_string());
            return None;
        }
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };

        let ticket = self.tickets.issue();
        self.status = RequestResetStatus::Sending;
        Some(PendingRequest { ticket, request })
    }

    /// Apply the outcome of the request identified by `ticket`. Returns
    /// whether it was applied.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        result: Result<ForgotPasswordResponse, ApiError>,
    ) -> bool {
        if !self.tickets.take(ticket) {
            tracing::debug!(ticket, "dropping stale reset request response");
            return false;
        }

        self.status = match result {
            Ok(response) => RequestResetStatus::Sent {
                message: response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SENT_MESSAGE.to_string()),
                reset_link: response.reset_link.filter(|_| self.dev_reset_links),
            },
            Err(e) => RequestResetStatus::Failed(e.user_message(FAILURE_MESSAGE)),
        };
        true
    }

    /// "Send another link": back to an empty form. Only valid once sent.
    pub fn send_another(&mut self) {
        if matches!(self.status, RequestResetStatus::Sent { .. }) {
            self.email.clear();
            self.status = RequestResetStatus::Idle;
        }
    }
}

/// Submit the form held in `form` through `api`. Returns whether a response
/// was applied.
pub async fn submit<A, S>(api: &A, form: &S) -> bool
where
    A: AuthApi,
    S: FormStore<RequestResetForm>,
{
    let Some(pending) = form.update(RequestResetForm::begin_submit) else {
        return false;
    };

    let result = api.forgot_password(pending.request).await;
    match &result {
        Ok(_) => tracing::info!("password reset link requested"),
        Err(e) => tracing::warn!(error = %e, "password reset request failed"),
    }
    form.update(|f| f.settle(pending.ticket, result))
}
