use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 100;

/// Why a new password was rejected on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    Mismatch,
    TooShort,
    MissingUppercase,
    MissingDigit,
    TooLong,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::Mismatch => write!(f, "Passwords do not match"),
            PasswordError::TooShort => write!(
                f,
                "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
            ),
            PasswordError::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            PasswordError::MissingDigit => write!(f, "Password must contain at least one number"),
            PasswordError::TooLong => write!(
                f,
                "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
            ),
        }
    }
}

impl std::error::Error for PasswordError {}

fn char_len(password: &str) -> usize {
    password.chars().count()
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Validate a new password and its confirmation.
///
/// Checks run in a fixed order and stop at the first failure: the
/// confirmation must match before any rule on the password itself is
/// looked at.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), PasswordError> {
    if password != confirm {
        return Err(PasswordError::Mismatch);
    }
    let len = char_len(password);
    if len < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if !has_uppercase(password) {
        return Err(PasswordError::MissingUppercase);
    }
    if !has_digit(password) {
        return Err(PasswordError::MissingDigit);
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

/// One line of the password requirements checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub label: &'static str,
    pub met: bool,
}

/// Requirements checklist for the password typed so far.
pub fn requirements(password: &str) -> Vec<Requirement> {
    vec![
        Requirement {
            label: "At least 8 characters",
            met: char_len(password) >= MIN_PASSWORD_LENGTH,
        },
        Requirement {
            label: "One uppercase letter",
            met: has_uppercase(password),
        },
        Requirement {
            label: "One number",
            met: has_digit(password),
        },
    ]
}
