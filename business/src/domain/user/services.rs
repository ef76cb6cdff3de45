use chrono::{DateTime, Utc};

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

/// Service port for one-way password hashing.
///
/// Implementations must salt every hash; the same password hashed twice
/// yields different strings.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, UserError>;

    /// Returns false for a wrong password and for a hash that cannot be parsed.
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}

/// A signed bearer token and the moment it stops being accepted.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service port for issuing and checking access tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<AccessToken, UserError>;
    fn verify(&self, token: &str) -> Result<UserId, UserError>;
}
