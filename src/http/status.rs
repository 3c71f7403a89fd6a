/// Response [status code][rfc].
///
/// Only the codes this server responds with can be constructed, see the associated constants.
///
/// [rfc]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

macro_rules! status_codes {
    ($($(#[$doc:meta])* $id:ident = $code:literal $reason:literal;)*) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self($code);
            )*

            /// Returns [`StatusCode`] of a known code.
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$id),)*
                    _ => None,
                }
            }

            /// Returns the canonical reason phrase, e.g: `Not Found`.
            pub const fn reason(&self) -> &'static str {
                match self.0 {
                    $($code => $reason,)*
                    _ => "",
                }
            }

            /// Returns the code followed by its reason phrase, as written in a status line,
            /// e.g: `404 Not Found`.
            pub const fn as_str(&self) -> &'static str {
                match self.0 {
                    $($code => concat!(stringify!($code), " ", $reason),)*
                    _ => "",
                }
            }
        }
    };
}

status_codes! {
    /// `200 OK`
    OK = 200 "OK";
    /// `201 Created`, the file has been written.
    CREATED = 201 "Created";
    /// `404 Not Found`
    NOT_FOUND = 404 "Not Found";
    /// `405 Method Not Allowed`, the route exists but does not handle the method.
    METHOD_NOT_ALLOWED = 405 "Method Not Allowed";
    /// `500 Internal Server Error`
    INTERNAL_SERVER_ERROR = 500 "Internal Server Error";
}

impl StatusCode {
    /// Returns the numeric code, e.g: `404`.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "StatusCode({})", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::StatusCode;

    #[test]
    fn test_status_code() {
        assert_eq!(StatusCode::from_u16(404), Some(StatusCode::NOT_FOUND));
        assert_eq!(StatusCode::from_u16(418), None);
        assert_eq!(StatusCode::CREATED.as_u16(), 201);
        assert_eq!(StatusCode::METHOD_NOT_ALLOWED.reason(), "Method Not Allowed");
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR.as_str(), "500 Internal Server Error");
        assert_eq!(StatusCode::default(), StatusCode::OK);
    }
}
