//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client sent a transaction that breaks one of the field rules,
    /// e.g. an empty description or an unparseable date.
    ///
    /// The message is safe to show to the client.
    #[error("{0}")]
    Validation(String),

    /// The requested transaction was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has not already been deleted.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// The transaction document could not be read or parsed.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not read the transaction document: {0}")]
    StorageRead(String),

    /// The transaction document could not be written.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not write the transaction document: {0}")]
    StorageWrite(String),

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLock,
}

/// The JSON body sent to clients when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// A short message describing what went wrong.
    pub error: String,
}

impl Error {
    /// Convert the error into a JSON response.
    ///
    /// Validation and not found errors are reported with their own message,
    /// everything else is logged and replaced with `fallback_message` so that
    /// storage details never reach the client.
    pub fn into_json_response(self, fallback_message: &str) -> Response {
        let (status, message) = match self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Error::NotFound => (StatusCode::NOT_FOUND, "Transaction not found".to_owned()),
            error => {
                tracing::error!("{fallback_message}: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, fallback_message.to_owned())
            }
        };

        json_error(status, &message)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_json_response("Something went wrong")
    }
}

/// Create a response with `status` and the body `{"error": message}`.
pub fn json_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_owned(),
        }),
    )
        .into_response()
}
