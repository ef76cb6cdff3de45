use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CategoryError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            CategoryError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            CategoryError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            CategoryError::NotFound | CategoryError::OwnerNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CategoryError::AlreadyExists => (StatusCode::CONFLICT, "Conflict"),
            CategoryError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_bad_credentials_to_unauthorized() {
        let (status, json) = CategoryError::InvalidCredentials.into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.0.message, "category.invalid_credentials");
    }

    #[test]
    fn should_map_foreign_category_to_forbidden() {
        let (status, _) = CategoryError::Forbidden.into_error_response();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn should_map_duplicate_name_to_conflict() {
        let (status, json) = CategoryError::AlreadyExists.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.name, "Conflict");
    }
}
