use serde::{Deserialize, Serialize};

/// Request DTO for asking the backend to issue a password reset link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Response for a password reset request.
///
/// Every field is optional on the wire: any 2xx counts as success and a
/// body that omits them decodes to the default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ForgotPasswordResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Live reset link. Only returned by non-production backends.
    #[serde(default)]
    pub reset_link: Option<String>,
}

/// Request DTO for resetting a password with a token.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

// Hand-written so the token and password never reach a log line.
impl std::fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("token", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
