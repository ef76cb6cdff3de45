use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::sale::errors::SaleError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SaleError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            SaleError::InvalidAmount => (StatusCode::BAD_REQUEST, "ValidationError"),
            SaleError::InsufficientStock => (StatusCode::UNPROCESSABLE_ENTITY, "StockError"),
            SaleError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            SaleError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            SaleError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
