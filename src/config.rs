//! Server configuration.
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use crate::h1::Limits;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 4221;

/// Default directory for the `/files` routes.
pub const DEFAULT_DATA_DIR: &str = "/tmp/data/codecrafters.io/http-server-tester";

/// Server configuration.
///
/// ```rust
/// use minhttp::Config;
///
/// let config = Config::default()
///     .with_addr(([127, 0, 0, 1], 0).into())
///     .with_data_dir("/tmp/minhttp");
///
/// assert_eq!(config.max_body_size(), 1024 * 1024);
/// assert_eq!(config.limits().max_field_size, 8 * 1024);
///
/// let config = config.with_max_body_size(64).with_max_field_size(256);
///
/// assert_eq!(config.max_body_size(), 64);
/// assert_eq!(config.limits().max_field_size, 256);
/// assert_eq!(config.data_dir(), std::path::Path::new("/tmp/minhttp"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    addr: SocketAddr,
    data_dir: PathBuf,
    limits: Limits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            limits: Limits::default(),
        }
    }
}

impl Config {
    /// Set the listening address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set the `/files` storage directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the maximum accepted request body size.
    pub fn with_max_body_size(mut self, max_body_size: u64) -> Self {
        self.limits.max_body_size = max_body_size;
        self
    }

    /// Set the maximum length of the request line or a single header field.
    pub fn with_max_field_size(mut self, max_field_size: usize) -> Self {
        self.limits.max_field_size = max_field_size;
        self
    }

    /// Returns the listening address.
    #[inline]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the `/files` storage directory.
    #[inline]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the maximum accepted request body size.
    #[inline]
    pub fn max_body_size(&self) -> u64 {
        self.limits.max_body_size
    }

    /// Returns the request size limits.
    #[inline]
    pub fn limits(&self) -> Limits {
        self.limits
    }
}
