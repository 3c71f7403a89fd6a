use std::io;

use crate::http::StatusCode;
use crate::log::error;
use crate::response::{IntoResponse, Response};

/// Handler failure, converted into a response with empty body.
#[derive(Debug)]
pub enum HandlerError {
    /// Route or file does not exist, `404`.
    NotFound,
    /// Method is not supported by the route, `405`.
    MethodNotAllowed,
    /// File storage failed, `500`.
    Storage(io::Error),
    /// Response compression failed, `500`.
    Encoding(io::Error),
}

impl HandlerError {
    /// Returns the response status.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Storage(_) | Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        if let Self::Storage(err) | Self::Encoding(err) = &self {
            error!("{self}: {err}");
        }
        Response::from_status(self.status())
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) | Self::Encoding(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::MethodNotAllowed => f.write_str("method not allowed"),
            Self::Storage(_) => f.write_str("file storage failed"),
            Self::Encoding(_) => f.write_str("content encoding failed"),
        }
    }
}
