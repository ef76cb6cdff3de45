use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty | ProductError::NegativeQuantity | ProductError::InvalidPrice => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ProductError::NotFound | ProductError::CategoryNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ProductError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
