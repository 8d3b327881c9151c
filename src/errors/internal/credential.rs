use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is disabled: {0}")]
    AccountDisabled(String),

    #[error("User already exists: {0}")]
    DuplicateUser(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Insufficient role: {required} required")]
    InsufficientRole { required: String },

    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),

    #[error("Invalid token: {token_type} - {reason}")]
    InvalidToken {
        token_type: String,
        reason: String,
    },

    #[error("Expired token: {0}")]
    ExpiredToken(String),
}

impl CredentialError {
    pub fn invalid_token(token_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            token_type: token_type.into(),
            reason: reason.into(),
        }
    }
}
