use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::mail::MailError;

/// Generic message shown for every server-side failure, whatever the
/// requested language.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Ein Fehler ist aufgetreten. Bitte versuchen Sie es später erneut.";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Name, E-Mail und Nachricht sind erforderlich")]
    MissingFields,

    #[error("Ungültige E-Mail-Adresse")]
    InvalidEmail,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("mail transport failed: {0}")]
    Transport(#[from] MailError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::MissingFields | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
            ContactError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ContactError::Transport(_) | ContactError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing body. Server errors never reveal their cause unless
    /// `development` is set.
    pub fn body(&self, development: bool) -> ErrorBody {
        if self.status().is_server_error() {
            ErrorBody {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
                debug: development.then(|| self.to_string()),
            }
        } else {
            ErrorBody {
                error: self.to_string(),
                debug: None,
            }
        }
    }
}

/// Error envelope: `{ "error": ..., "debug"?: ... }`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

/// A [`ContactError`] bound to the runtime mode it is rendered under.
#[derive(Debug)]
pub struct ApiError {
    pub error: ContactError,
    pub development: bool,
}

impl ApiError {
    pub fn new(error: ContactError, development: bool) -> Self {
        Self { error, development }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status();

        if status.is_server_error() {
            error!(error = ?self.error, "Contact form error: {:#}", self.error);
        } else {
            warn!(status = status.as_u16(), "Rejected contact request: {}", self.error);
        }

        (status, Json(self.error.body(self.development))).into_response()
    }
}
