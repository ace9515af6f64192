use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::dashboards::d400_team_financials::ErrorResponse;

use crate::dashboards::d400_team_financials::repository::StoreError;

/// Error returned by API handlers, rendered as `{ "error": "..." }`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required query parameter is missing or empty (400)
    #[error("{0} is required")]
    MissingParameter(&'static str),
    /// The store reported an error; its message is passed through (500)
    #[error("{0}")]
    Store(String),
    /// Anything else; only the generic message leaves the server (500)
    #[error("{0}")]
    Unexpected(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a store failure, using `generic` for failures whose details stay internal
    pub fn from_store(err: StoreError, generic: &'static str) -> Self {
        match err {
            StoreError::Query(db_err) => Self::Store(db_err.to_string()),
            StoreError::Decode(_) => Self::Unexpected(generic),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Response for a handler that panicked
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiError::Unexpected("Internal server error").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingParameter("teamId").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Unexpected("Failed").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_parameter_message() {
        assert_eq!(
            ApiError::MissingParameter("teamId").to_string(),
            "teamId is required"
        );
    }

    #[test]
    fn test_decode_details_stay_internal() {
        let err = ApiError::from_store(
            StoreError::Decode("revenue: column type mismatch".into()),
            "Failed to fetch revenues",
        );
        assert_eq!(err.to_string(), "Failed to fetch revenues");

        let db_err = DbErr::Custom("no such table: financials".into());
        let expected = db_err.to_string();
        let err = ApiError::from_store(StoreError::Query(db_err), "Failed to fetch revenues");
        assert_eq!(err.to_string(), expected);
    }
}
