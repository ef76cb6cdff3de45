#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.not_found")]
    NotFound,
    #[error("user.invalid_password")]
    InvalidPassword,
    #[error("user.invalid_token")]
    InvalidToken,
    #[error("user.hashing_failed")]
    HashingFailed,
    #[error("user.token_issue_failed")]
    TokenIssueFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
