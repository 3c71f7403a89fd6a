use bytes::Bytes;

use crate::headers::error::HeaderError;
use crate::common::is_tchar;

/// HTTP Header name.
///
/// The name is kept as received, comparison between names is ASCII case-insensitive.
#[derive(Clone)]
pub struct HeaderName {
    /// is valid ASCII token
    bytes: Bytes,
}

impl HeaderName {
    /// Parse header name from static string.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        match validate_header_name(name.as_bytes()) {
            Ok(()) => Self {
                bytes: Bytes::from_static(name.as_bytes()),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header name from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name.
    #[inline]
    pub fn from_bytes<B: Into<Bytes>>(name: B) -> Result<Self, HeaderError> {
        let bytes = name.into();
        match validate_header_name(&bytes) {
            Ok(()) => Ok(Self { bytes }),
            Err(err) => Err(err),
        }
    }

    /// Returns header name as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // `bytes` is valid ASCII
        match std::str::from_utf8(&self.bytes) {
            Ok(name) => name,
            Err(_) => unreachable!("header name is validated as ASCII"),
        }
    }

    /// Header names are case-insensitive.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.bytes.eq_ignore_ascii_case(name.as_bytes())
    }
}

// ===== Parser =====

const MAX_HEADER_NAME_LEN: usize = 1024;  // 1KB

/// token       = 1*tchar
/// field-name  = token
const fn validate_header_name(mut bytes: &[u8]) -> Result<(), HeaderError> {
    match bytes.len() {
        0 => return Err(HeaderError::EmptyName),
        len if len > MAX_HEADER_NAME_LEN => return Err(HeaderError::NameTooLong),
        _ => {}
    }

    while let [byte, rest @ ..] = bytes {
        if is_tchar(*byte) {
            bytes = rest;
        } else {
            return Err(HeaderError::InvalidName)
        }
    }

    Ok(())
}

// ===== Lookup =====

/// A type that can be used to lookup a [`HeaderMap`].
///
/// [`HeaderMap`]: super::HeaderMap
pub trait AsHeaderName {
    /// Returns the name to compare against, case-insensitively.
    fn as_name_str(&self) -> &str;
}

impl AsHeaderName for HeaderName {
    #[inline]
    fn as_name_str(&self) -> &str {
        self.as_str()
    }
}

impl AsHeaderName for &HeaderName {
    #[inline]
    fn as_name_str(&self) -> &str {
        self.as_str()
    }
}

impl AsHeaderName for &str {
    #[inline]
    fn as_name_str(&self) -> &str {
        self
    }
}

// ===== Traits =====

impl PartialEq for HeaderName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bytes.eq_ignore_ascii_case(&other.bytes)
    }
}

impl Eq for HeaderName { }

impl PartialEq<str> for HeaderName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for HeaderName {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl std::fmt::Display for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

// ===== Standard =====

/// Standard header names used by this server.
pub mod standard {
    use super::HeaderName;

    macro_rules! standard {
        ($($(#[$doc:meta])* $id:ident $name:literal;)*) => {
            $(
                $(#[$doc])*
                pub const $id: HeaderName = HeaderName::from_static($name);
            )*
        };
    }

    standard! {
        /// Content codings the client is able to understand.
        ACCEPT_ENCODING "Accept-Encoding";
        /// Content coding applied to the representation.
        CONTENT_ENCODING "Content-Encoding";
        /// Size of the message body in bytes.
        CONTENT_LENGTH "Content-Length";
        /// Media type of the representation.
        CONTENT_TYPE "Content-Type";
        /// Transfer codings applied to the message body.
        TRANSFER_ENCODING "Transfer-Encoding";
        /// Product that originates the request.
        USER_AGENT "User-Agent";
    }
}
