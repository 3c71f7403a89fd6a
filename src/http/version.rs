/// Protocol version of a request or response.
///
/// Requests may be `HTTP/1.0` or `HTTP/1.1`, responses are always written as `HTTP/1.1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    /// `HTTP/1.0`
    Http10,
    /// `HTTP/1.1`
    #[default]
    Http11,
}

impl Version {
    /// `HTTP/1.0`
    pub const HTTP_10: Version = Version::Http10;

    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version::Http11;

    /// Parse the version token at the end of a request line.
    #[inline]
    pub const fn from_bytes(token: &[u8]) -> Option<Version> {
        match token {
            b"HTTP/1.0" => Some(Version::Http10),
            b"HTTP/1.1" => Some(Version::Http11),
            _ => None,
        }
    }

    /// Returns the version token, e.g: `HTTP/1.1`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
