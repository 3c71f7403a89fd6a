//! HTTP/1.1 Protocol.
//!
//! - [`parser`] contains the request line and header field parsers.
//! - [`connection`] reads one [`Request`], calls the service, and writes the [`Response`] back.
//! - [`write_response`] serializes a [`Response`] into wire bytes.
//!
//! [`Request`]: crate::Request
//! [`Response`]: crate::Response
pub mod parser;
pub mod connection;
mod body;
mod write;
mod error;

pub use connection::{Limits, read_request, serve_connection};
pub use write::write_response;
pub use error::MalformedRequest;
