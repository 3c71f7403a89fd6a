//! HTTP Header Multimap.
mod name;
mod value;
mod map;
mod error;

pub use name::{HeaderName, AsHeaderName, standard};
pub use value::HeaderValue;
pub use map::{HeaderMap, GetAll, Iter};
pub use error::HeaderError;

#[cfg(test)]
mod test;
