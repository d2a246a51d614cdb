/**
 * Board Error Types
 *
 * This module defines the errors the board surfaces to its callers. The
 * original page swallowed every store rejection after logging it; here the
 * failure is an explicit value so the view (or the API layer) decides what
 * to do with unreconciled local state.
 *
 * # Error Categories
 *
 * - Empty-input submissions are rejected before any remote call.
 * - The edit action is guarded by the supporter flag.
 * - Store rejections wrap `StoreError` and map to HTTP status codes.
 *
 * No error is ever fatal to the process and nothing is retried.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// An add/edit submit carried an empty input string
    #[error("task text must not be empty")]
    EmptyInput,

    /// A non-supporter tried to enter edit mode
    #[error("editing requires an active supporter session")]
    SupporterRequired,

    /// The targeted task is not on the board
    #[error("task {id} is not on the board")]
    UnknownTask {
        /// The id that was targeted
        id: String,
    },

    /// The remote store rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BoardError {
    /// HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `EmptyInput` - 400 Bad Request
    /// - `SupporterRequired` - 403 Forbidden
    /// - `UnknownTask` - 404 Not Found
    /// - `Store(NotFound)` - 404 Not Found
    /// - `Store(InvalidId)` - 404 Not Found (opaque ids, no format leak)
    /// - `Store(Rejected)` - 502 Bad Gateway
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyInput => StatusCode::BAD_REQUEST,
            Self::SupporterRequired => StatusCode::FORBIDDEN,
            Self::UnknownTask { .. } => StatusCode::NOT_FOUND,
            Self::Store(err) => match err {
                StoreError::NotFound { .. } | StoreError::InvalidId { .. } => {
                    StatusCode::NOT_FOUND
                }
                StoreError::Rejected { .. } => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_bad_request() {
        assert_eq!(BoardError::EmptyInput.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_supporter_guard_is_forbidden() {
        assert_eq!(
            BoardError::SupporterRequired.status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_store_rejection_is_bad_gateway() {
        let err = BoardError::from(StoreError::Rejected {
            message: "connection reset".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let err = BoardError::from(StoreError::InvalidId { id: "zzz".to_string() });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
