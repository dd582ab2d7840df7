use thiserror::Error;

/// Errors produced while talking to the platform's REST API.
///
/// Nothing here is fatal: binaries log the error and exit with a nonzero
/// code, library callers decide how to degrade.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no saved token, run the login command first")]
    MissingToken,

    #[error("session is not authorized anymore, log in again")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request to {path} failed with status {status}")]
    FetchFailed {
        path: String,
        status: u16,
        /* raw body kept for diagnostics */
        body: String,
    },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// Errors produced by lead submission.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("field `{0}` must not be empty")]
    MissingField(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors produced by the session file store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
