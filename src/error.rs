use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("seeded random source is poisoned")]
    SourcePoisoned,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot parse ip \"{0}\": {1}")]
    InvalidIp(String, std::net::AddrParseError),
    #[error("tls needs both a key file and a cert file")]
    IncompleteTls,
    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Body of every failed weather request.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct InternalError {
    pub message: String,
}

impl InternalError {
    pub fn new(message: String) -> InternalError {
        InternalError { message }
    }
}

impl From<WeatherError> for InternalError {
    fn from(error: WeatherError) -> Self {
        InternalError::new(error.to_string())
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        // The cause only goes to the log, callers always get the same message.
        error!(
            "Error encountered while processing request: {}",
            self.message
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: FETCH_FAILED_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
