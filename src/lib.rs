//! Minimal HTTP/1.1 Server
//!
//! - [`h1`] reads a [`Request`] off a connection and writes a [`Response`] back.
//! - [`routing`] maps a request path to one of the fixed handlers.
//! - [`rt`] owns the listener and spawns one task per connection.
#![warn(missing_debug_implementations)]

mod log;
mod common;

pub mod http;
pub mod headers;
pub mod request;
pub mod response;
pub mod h1;
pub mod encoding;
pub mod storage;
pub mod routing;
pub mod service;
pub mod config;
pub mod rt;

pub use config::Config;
pub use request::Request;
pub use response::Response;
pub use routing::Router;
