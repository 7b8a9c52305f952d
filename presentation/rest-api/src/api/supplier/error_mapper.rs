use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::supplier::errors::SupplierError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SupplierError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            SupplierError::NameEmpty | SupplierError::CnpjEmpty => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            SupplierError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            SupplierError::DuplicatedCnpj => (StatusCode::BAD_REQUEST, "Duplicated"),
            SupplierError::InUse => (StatusCode::BAD_REQUEST, "InUse"),
            SupplierError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
