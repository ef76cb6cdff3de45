use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            UserError::InvalidEmail | UserError::PasswordTooShort | UserError::NameEmpty => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            UserError::EmailTaken => (StatusCode::CONFLICT, "Conflict"),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            UserError::InvalidPassword | UserError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            UserError::HashingFailed | UserError::TokenIssueFailed | UserError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
