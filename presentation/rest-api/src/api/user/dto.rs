use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::{Session, User};

#[derive(Debug, Clone, Object)]
pub struct SignUpRequest {
    /// Login email, stored lower-cased
    pub email: String,
    /// At least 8 characters
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user. The password hash never leaves the server.
#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub user: UserResponse,
    /// Send as `Authorization: Bearer <token>`
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user: session.user.into(),
            access_token: session.access_token.token,
            token_type: "Bearer".to_string(),
            expires_at: session.access_token.expires_at,
        }
    }
}
