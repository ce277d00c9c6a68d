// HTTP mapping of service errors
use crate::application::error::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<&'static str>,
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::MissingFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error, fields) = match &self {
            ServiceError::NotFound { .. } => ("Not Found", Vec::new()),
            ServiceError::MissingFields(fields) => ("Missing Fields", fields.clone()),
            ServiceError::Validation(_) => ("Bad Request", Vec::new()),
            ServiceError::InvalidCredentials => ("Unauthorized", Vec::new()),
            ServiceError::Internal(_) => ("Internal Server Error", Vec::new()),
        };

        let message = match &self {
            ServiceError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                "An internal error occurred".to_string()
            }
            other => {
                tracing::warn!("Request rejected: {}", other);
                other.to_string()
            }
        };

        (
            status,
            Json(ErrorResponse {
                error,
                message,
                fields,
            }),
        )
            .into_response()
    }
}
