use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use crud::CrudError;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Error returned by handlers. Renders as [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }
}

impl From<CrudError> for ApiError {
    fn from(err: CrudError) -> Self {
        match err {
            CrudError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CrudError::Conflict(msg) => Self::new(StatusCode::BAD_REQUEST, "CONFLICT", msg),
            CrudError::Unauthorized(msg) => Self::unauthorized(msg),
            CrudError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            CrudError::Database(db_error) => {
                error!("Database error: {}", db_error);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Internal server error",
                )
            }
            other => {
                error!("Internal error: {}", other);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(status = %self.status, code = self.code, "{}", self.message);
        }

        let body = ErrorResponse {
            error: self.message,
            code: self.code.to_string(),
            success: false,
        };
        let mut response = (self.status, Json(body)).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CrudError::not_found("Hotel"), StatusCode::NOT_FOUND),
            (
                CrudError::Conflict("Hotel name already exists".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CrudError::Unauthorized("Could not validate credentials".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (CrudError::Validation("bad".to_string()), StatusCode::BAD_REQUEST),
            (
                CrudError::Database(DbErr::Custom("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiError::unauthorized("Could not validate credentials").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(WWW_AUTHENTICATE).unwrap(), "Bearer");

        let response = ApiError::from(CrudError::not_found("Season")).into_response();
        assert!(response.headers().get(WWW_AUTHENTICATE).is_none());
    }
}
