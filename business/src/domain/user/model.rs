use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::UserError;
use super::services::AccessToken;
use crate::domain::shared::value_objects::UserId;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// A logged-in user together with the token that proves it.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub access_token: AccessToken,
}

/// Trims and lower-cases an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), UserError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(UserError::InvalidEmail)
    }
}

/// Checked on the plaintext, before hashing.
pub fn validate_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort);
    }
    Ok(())
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let email = normalize_email(&props.email);
        validate_email(&email)?;

        if props.first_name.trim().is_empty() || props.last_name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::generate(),
            email,
            password_hash: props.password_hash,
            first_name: props.first_name.trim().to_string(),
            last_name: props.last_name.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            first_name,
            last_name,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(email: &str, first_name: &str, last_name: &str) -> NewUserProps {
        NewUserProps {
            email: email.to_string(),
            password_hash: "hashed".to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    #[test]
    fn should_create_user_when_props_valid() {
        let user = User::new(props("ada@example.com", "Ada", "Lovelace")).unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.password_hash, "hashed");
    }

    #[test]
    fn should_normalize_email_when_mixed_case_and_padded() {
        let user = User::new(props("  Ada@Example.COM ", "Ada", "Lovelace")).unwrap();

        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn should_reject_when_email_has_no_domain() {
        let result = User::new(props("ada@", "Ada", "Lovelace"));

        assert!(matches!(result.unwrap_err(), UserError::InvalidEmail));
    }

    #[test]
    fn should_reject_when_email_has_spaces() {
        let result = User::new(props("ada love@example.com", "Ada", "Lovelace"));

        assert!(matches!(result.unwrap_err(), UserError::InvalidEmail));
    }

    #[test]
    fn should_reject_when_last_name_blank() {
        let result = User::new(props("ada@example.com", "Ada", "   "));

        assert!(matches!(result.unwrap_err(), UserError::NameEmpty));
    }

    #[test]
    fn should_reject_password_when_shorter_than_minimum() {
        assert!(matches!(
            validate_password("short").unwrap_err(),
            UserError::PasswordTooShort
        ));
        assert!(validate_password("long-enough").is_ok());
    }
}
