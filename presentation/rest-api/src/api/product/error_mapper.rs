use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty
            | ProductError::InvalidPrice
            | ProductError::InvalidQuantity => {
                (StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            ProductError::NotFound { .. } => (StatusCode::NOT_FOUND, "NotFound", self.to_string()),
            ProductError::Conflict(_) => (StatusCode::BAD_REQUEST, "Conflict", self.to_string()),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                self.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
