use bytes::Bytes;
use std::io;

use super::HandlerError;
use crate::encoding::{self, ContentCoding};
use crate::headers::HeaderValue;
use crate::headers::standard::USER_AGENT;
use crate::http::{Method, StatusCode};
use crate::request::Request;
use crate::response::Response;
use crate::storage::Storage;

const TEXT_PLAIN: HeaderValue = HeaderValue::from_static("text/plain");
const OCTET_STREAM: HeaderValue = HeaderValue::from_static("application/octet-stream");

/// Route handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// `200` with empty body.
    Root,
    /// Echo the `User-Agent` header as `text/plain`.
    UserAgent,
    /// Echo the path after `/echo/` as `text/plain`, gzip encoded when accepted.
    Echo,
    /// Read a file on `GET`, write a file on `POST`.
    Files,
    /// `404` with empty body.
    NotFound,
}

impl Handler {
    /// Handle request.
    pub async fn call<S: Storage>(self, req: Request, storage: &S) -> Result<Response, HandlerError> {
        match self {
            Self::Root => Ok(root()),
            Self::UserAgent => Ok(user_agent(&req)),
            Self::Echo => echo(&req),
            Self::Files => files(req, storage).await,
            Self::NotFound => Err(HandlerError::NotFound),
        }
    }
}

fn root() -> Response {
    Response::from_status(StatusCode::OK)
}

fn user_agent(req: &Request) -> Response {
    let agent = match req.headers().get(USER_AGENT) {
        Some(value) => value.clone().into_bytes(),
        None => Bytes::new(),
    };
    Response::with_content(StatusCode::OK, TEXT_PLAIN, agent)
}

/// `/echo/<text>`, where `<text>` is everything after the second `/`, it may contains `/`.
fn echo(req: &Request) -> Result<Response, HandlerError> {
    let Some(text) = req.path().splitn(3, '/').nth(2) else {
        return Err(HandlerError::NotFound);
    };

    let res = Response::with_content(StatusCode::OK, TEXT_PLAIN, Bytes::copy_from_slice(text.as_bytes()));
    let coding = ContentCoding::negotiate(req.headers());

    encoding::encode(res, coding).map_err(HandlerError::Encoding)
}

/// Only the final path segment is used as file name, directory components are discarded.
fn file_name(path: &str) -> Option<&str> {
    match path.rsplit('/').next() {
        None | Some("" | "." | "..") => None,
        Some(name) => Some(name),
    }
}

async fn files<S: Storage>(req: Request, storage: &S) -> Result<Response, HandlerError> {
    let Some(name) = file_name(req.path()) else {
        return Err(HandlerError::NotFound);
    };

    let method = req.method();

    if *method == Method::GET {
        match storage.read(name).await {
            Ok(contents) => Ok(Response::with_content(StatusCode::OK, OCTET_STREAM, contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(HandlerError::NotFound),
            Err(err) => Err(HandlerError::Storage(err)),
        }
    } else if *method == Method::POST {
        let name = name.to_owned();
        match storage.write(&name, req.into_body()).await {
            Ok(()) => Ok(Response::from_status(StatusCode::CREATED)),
            Err(err) => Err(HandlerError::Storage(err)),
        }
    } else {
        Err(HandlerError::MethodNotAllowed)
    }
}
