//! HTTP Protocol.
mod method;
mod status;
mod version;

pub use method::{Method, InvalidMethod};
pub use version::Version;
pub use status::StatusCode;
