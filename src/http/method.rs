use crate::common::is_tchar;

/// HTTP Method.
///
/// Methods from [RFC9110] and the PATCH method from [RFC5789] are provided as constants. Any
/// other method that is a valid token is kept as an opaque extension method.
///
/// [RFC5789]: https://www.rfc-editor.org/rfc/rfc5789
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Method(Inner);

#[derive(Clone, PartialEq, Eq, Hash)]
enum Inner {
    Standard(u8),
    Extension(Box<str>),
}

methods! {
    /// The [GET] method requests transfer of a current selected representation for the target
    /// resource.
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    pub const GET = (0, b"GET");
    /// The [HEAD] method is identical to GET except that the server MUST NOT send content in the
    /// response.
    ///
    /// [HEAD]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-head>
    pub const HEAD = (1, b"HEAD");
    /// The [POST] method requests that the target resource process the representation enclosed
    /// in the request according to the resource's own specific semantics.
    ///
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    pub const POST = (2, b"POST");
    /// The [PUT] method requests that the state of the target resource be created or replaced.
    ///
    /// [PUT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-put>
    pub const PUT = (3, b"PUT");
    /// The [DELETE] method requests that the origin server remove the association between the
    /// target resource and its current functionality.
    ///
    /// [DELETE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-delete>
    pub const DELETE = (4, b"DELETE");
    /// The [CONNECT] method requests that the recipient establish a tunnel.
    ///
    /// [CONNECT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-connect>
    pub const CONNECT = (5, b"CONNECT");
    /// The [OPTIONS] method requests information about the communication options available for
    /// the target resource.
    ///
    /// [OPTIONS]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-options>
    pub const OPTIONS = (6, b"OPTIONS");
    /// The [TRACE] method requests a remote, application-level loop-back of the request message.
    ///
    /// [TRACE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-trace>
    pub const TRACE = (7, b"TRACE");
    /// The [PATCH] method requests that a set of changes described in the request entity be
    /// applied to the resource identified by the Request-URI.
    ///
    /// [PATCH]: <https://www.rfc-editor.org/rfc/rfc5789#section-2>
    pub const PATCH = (8, b"PATCH");
}

impl Method {
    /// Create [`Method`] from bytes.
    ///
    /// Unknown methods are accepted as long as they are a valid [token].
    ///
    /// [token]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-tokens>
    pub fn from_bytes(src: &[u8]) -> Result<Method, InvalidMethod> {
        if let Some(standard) = Self::from_standard(src) {
            return Ok(standard);
        }
        if src.is_empty() || !src.iter().all(|b| is_tchar(*b)) {
            return Err(InvalidMethod);
        }
        // all bytes are ASCII tchar
        match std::str::from_utf8(src) {
            Ok(ext) => Ok(Self(Inner::Extension(ext.into()))),
            Err(_) => Err(InvalidMethod),
        }
    }

    /// Returns string representation of the method.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Inner::Standard(idx) => NAMES[*idx as usize],
            Inner::Extension(ext) => ext,
        }
    }
}

impl Default for Method {
    #[inline]
    fn default() -> Self {
        Self::GET
    }
}

impl std::str::FromStr for Method {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Error =====

/// Method is empty or contains a byte outside of token characters.
pub struct InvalidMethod;

impl std::error::Error for InvalidMethod { }

impl std::fmt::Debug for InvalidMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid method")
    }
}

impl std::fmt::Display for InvalidMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid method")
    }
}

// ===== Macros =====

macro_rules! methods {
    (
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($idx:literal, $val:literal);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self(Inner::Standard($idx));
            )*

            const fn from_standard(src: &[u8]) -> Option<Method> {
                match src {
                    $(
                        $val => Some(Self::$name),
                    )*
                    _ => None,
                }
            }
        }

        static NAMES: &[&str] = &[
            $(
                stringify!($name),
            )*
        ];
    };
}

use {methods};

#[cfg(test)]
mod test {
    use super::Method;

    #[test]
    fn test_method_from_bytes() {
        assert_eq!(Method::from_bytes(b"GET").unwrap(), Method::GET);
        assert_eq!(Method::from_bytes(b"POST").unwrap(), Method::POST);
        assert_eq!(Method::PATCH.as_str(), "PATCH");

        let purge = Method::from_bytes(b"PURGE").unwrap();
        assert_eq!(purge.as_str(), "PURGE");
        assert_ne!(purge, Method::GET);

        assert!(Method::from_bytes(b"").is_err());
        assert!(Method::from_bytes(b"GE T").is_err());
        assert!(Method::from_bytes(b"GET\x7F").is_err());
    }
}
