use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CategoryError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            CategoryError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            CategoryError::Duplicated => (StatusCode::BAD_REQUEST, "Duplicated"),
            CategoryError::InUse => (StatusCode::BAD_REQUEST, "InUse"),
            CategoryError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
