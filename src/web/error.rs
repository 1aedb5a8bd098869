use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Maps the service taxonomy onto explicit status codes and a JSON error
/// body, so internal failures never surface as bare transport errors.
pub enum ApiError {
    BadParam(String),
    Service(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label, message) = match &self {
            Self::BadParam(message) => {
                (StatusCode::BAD_REQUEST, "bad_parameter", message.clone())
            }
            Self::Service(err) => match err {
                Error::DuplicateSlug { .. } => {
                    (StatusCode::CONFLICT, "duplicate_slug", err.to_string())
                }
                Error::InvalidSlug { .. }
                | Error::CountOutOfRange { .. }
                | Error::NoTermsToAssign => {
                    (StatusCode::BAD_REQUEST, "validation", err.to_string())
                }
                Error::InvalidCursor => {
                    (StatusCode::BAD_REQUEST, "invalid_cursor", err.to_string())
                }
                Error::Db(_) | Error::Pool(_) | Error::Json(_) => {
                    tracing::error!("internal error: {err:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal",
                        "internal server error".to_string(),
                    )
                }
            },
        };

        let body = Json(serde_json::json!({
            "error": label,
            "message": message,
        }));
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
